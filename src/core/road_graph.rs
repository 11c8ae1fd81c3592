//! Der Straßengraph: Aggregat aller Straßen und Kreuzungen.

use std::collections::HashMap;

use super::junction::Junction;
use super::lane::{Lane, LaneAddress};
use super::road::Road;
use super::{JunctionId, LaneId, RoadId};

/// Adressiert eine Sektion innerhalb einer Straße für Spur-Abfragen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLocator {
    /// Erste Sektion (niedrigstes `s`)
    Start,
    /// Letzte Sektion (höchstes `s`)
    End,
    /// Sektion über ihren abgeleiteten Index in `s`-Reihenfolge
    Index(usize),
}

/// Container für alle Straßen und Kreuzungen, indexiert nach ihrer Id.
///
/// Der Graph besitzt sämtliche Entitäten exklusiv; Querverweise zwischen
/// Spuren bzw. Straßen sind reine Id-Adressen ohne Besitz. Entitäten
/// werden nie entfernt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadGraph {
    roads: HashMap<RoadId, Road>,
    junctions: HashMap<JunctionId, Junction>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Straßen ────────────────────────────────────────────────

    /// Fügt eine Straße ein. Gibt `false` zurück falls die Id schon belegt ist.
    pub fn add_road(&mut self, road: Road) -> bool {
        if self.roads.contains_key(&road.id) {
            return false;
        }
        self.roads.insert(road.id, road);
        true
    }

    pub fn contains_road(&self, road_id: RoadId) -> bool {
        self.roads.contains_key(&road_id)
    }

    pub fn road(&self, road_id: RoadId) -> Option<&Road> {
        self.roads.get(&road_id)
    }

    pub fn road_mut(&mut self, road_id: RoadId) -> Option<&mut Road> {
        self.roads.get_mut(&road_id)
    }

    /// Iterator über alle Straßen (Reihenfolge unbestimmt)
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }

    /// Alle Straßen-Ids, aufsteigend sortiert (deterministische Abläufe)
    pub fn road_ids(&self) -> Vec<RoadId> {
        let mut ids: Vec<RoadId> = self.roads.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    // ── Kreuzungen ─────────────────────────────────────────────

    /// Fügt eine Kreuzung ein. Gibt `false` zurück falls die Id schon belegt ist.
    pub fn add_junction(&mut self, junction: Junction) -> bool {
        if self.junctions.contains_key(&junction.id) {
            return false;
        }
        self.junctions.insert(junction.id, junction);
        true
    }

    pub fn contains_junction(&self, junction_id: JunctionId) -> bool {
        self.junctions.contains_key(&junction_id)
    }

    pub fn junction(&self, junction_id: JunctionId) -> Option<&Junction> {
        self.junctions.get(&junction_id)
    }

    pub fn junction_mut(&mut self, junction_id: JunctionId) -> Option<&mut Junction> {
        self.junctions.get_mut(&junction_id)
    }

    /// Iterator über alle Kreuzungen (Reihenfolge unbestimmt)
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.junctions.values()
    }

    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    // ── Spur-Abfragen ──────────────────────────────────────────

    /// Spur hinter einer aufgelösten Adresse
    pub fn lane(&self, address: &LaneAddress) -> Option<&Lane> {
        self.roads
            .get(&address.road)?
            .section_at(address.section)?
            .lane(address.lane)
    }

    pub(crate) fn lane_link_mut(&mut self, address: &LaneAddress) -> Option<&mut Lane> {
        self.roads
            .get_mut(&address.road)?
            .section_at_mut(address.section)?
            .lane_mut(address.lane)
    }

    pub(crate) fn lane_at_mut(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
    ) -> Option<&mut Lane> {
        self.roads
            .get_mut(&road_id)?
            .section_by_index_mut(section_index)?
            .lane_mut(lane_id)
    }

    /// Schlägt eine Spur nach und liefert ihre dauerhafte Adresse.
    ///
    /// Zweimal mit denselben Argumenten auf unverändertem Graphen
    /// aufgerufen liefert der Lookup dieselbe Adresse.
    pub fn lane_address(
        &self,
        road_id: RoadId,
        locator: SectionLocator,
        lane_id: LaneId,
    ) -> Option<LaneAddress> {
        let road = self.road(road_id)?;
        let section = match locator {
            SectionLocator::Start => road.first_section()?,
            SectionLocator::End => road.last_section()?,
            SectionLocator::Index(index) => road.section_by_index(index)?,
        };
        section.lane(lane_id)?;
        Some(LaneAddress::new(road_id, section.key(), lane_id))
    }
}
