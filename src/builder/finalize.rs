//! Finalisierung: Straßen-Verkettung (Pass 1) und Spur-Auflösung (Pass 2).

use std::collections::HashSet;

use super::MapBuilder;
use crate::core::{Lane, LaneAddress, LaneId, LaneLink, Road, RoadGraph, RoadId, RoadLink};
use crate::diagnostics::DiagnosticKind;

/// Welches Ende eines Verweises gerade bearbeitet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkEnd {
    Predecessor,
    Successor,
}

impl LinkEnd {
    fn label(self) -> &'static str {
        match self {
            LinkEnd::Predecessor => "Vorgänger",
            LinkEnd::Successor => "Nachfolger",
        }
    }

    fn set(self, lane: &mut Lane, link: LaneLink) {
        match self {
            LinkEnd::Predecessor => lane.predecessor = link,
            LinkEnd::Successor => lane.successor = link,
        }
    }
}

impl MapBuilder {
    /// Pass 1: löst rohe Straßen-Verweise auf und berechnet pro Straße die
    /// Position in ihrer Segment-Kette sowie deren Gesamtlänge.
    ///
    /// Ketten werden deterministisch in aufsteigender Straßen-Id-Reihenfolge
    /// abgelaufen: erst ab jedem Ketten-Kopf (Straße ohne aufgelösten
    /// Vorgänger), danach verbleibende Ringe ab beliebigem Segment. Jedes
    /// Segment gehört genau einer Kette; ein Besucht-Set schützt vor Zyklen.
    pub(crate) fn link_road_segments(&mut self) {
        let road_ids = self.graph.road_ids();

        for &road_id in &road_ids {
            let links = self
                .graph
                .road(road_id)
                .map(|road| (road.predecessor, road.successor));
            let Some((predecessor, successor)) = links else {
                continue;
            };
            let predecessor = self.resolve_road_link(road_id, predecessor, LinkEnd::Predecessor);
            let successor = self.resolve_road_link(road_id, successor, LinkEnd::Successor);
            if let Some(road) = self.graph.road_mut(road_id) {
                road.predecessor = predecessor;
                road.successor = successor;
            }
        }

        let mut visited: HashSet<RoadId> = HashSet::new();
        for &road_id in &road_ids {
            let is_head = self
                .graph
                .road(road_id)
                .map_or(false, |road| !road.predecessor.is_resolved());
            if is_head {
                self.walk_chain(road_id, &mut visited);
            }
        }
        // Übrig bleiben nur noch Ringe ohne Ketten-Kopf
        for &road_id in &road_ids {
            if !visited.contains(&road_id) {
                self.walk_chain(road_id, &mut visited);
            }
        }
    }

    /// Wandelt einen Pending-Verweis in `Resolved` bzw. `None` (mit Diagnose).
    fn resolve_road_link(&mut self, road_id: RoadId, link: RoadLink, end: LinkEnd) -> RoadLink {
        let RoadLink::Pending(raw) = link else {
            return link;
        };
        let target = raw as RoadId;
        if self.graph.contains_road(target) {
            self.report.linked_road_ends += 1;
            RoadLink::Resolved(target)
        } else {
            self.report.dangling_road_links += 1;
            self.diagnostics.record(
                DiagnosticKind::DanglingRoadLink,
                format!(
                    "Straße {}: {} {} existiert nicht, Verweis entfernt",
                    road_id,
                    end.label(),
                    raw
                ),
            );
            RoadLink::None
        }
    }

    /// Läuft eine Segment-Kette ab `start` entlang der Nachfolger-Verweise ab
    /// und schreibt kumulierte Offsets und die Gesamtlänge in alle Segmente.
    fn walk_chain(&mut self, start: RoadId, visited: &mut HashSet<RoadId>) {
        if visited.contains(&start) {
            return;
        }
        let mut members: Vec<(RoadId, f64)> = Vec::new();
        let mut offset = 0.0;
        let mut current = start;
        loop {
            if !visited.insert(current) {
                // Ring geschlossen oder Kette mündet in eine bereits vergebene
                break;
            }
            let step = self
                .graph
                .road(current)
                .map(|road| (road.length, road.successor));
            let Some((length, successor)) = step else {
                break;
            };
            members.push((current, offset));
            offset += length;
            match successor.resolved() {
                Some(next) => current = next,
                None => break,
            }
        }
        if members.is_empty() {
            return;
        }
        let total_length = offset;
        for (road_id, chain_offset) in members {
            if let Some(road) = self.graph.road_mut(road_id) {
                road.set_chain(chain_offset, total_length);
            }
        }
        self.report.road_chains += 1;
    }

    /// Pass 2: löst rohe Spur-Nachbar-Ids in konkrete Spur-Adressen auf.
    ///
    /// Innerhalb einer Straße zeigt der Verweis in die angrenzende Sektion
    /// derselben Straße; an der ersten bzw. letzten Sektion über den in
    /// Pass 1 aufgelösten Straßen-Verweis in die nächstliegende Grenz-Sektion
    /// der Nachbarstraße. Ohne Treffer bleibt der Verweis explizit leer.
    pub(crate) fn resolve_lane_links(&mut self) {
        let mut resolved: Vec<(LaneAddress, LinkEnd, LaneAddress)> = Vec::new();
        let mut unresolved: Vec<(LaneAddress, LinkEnd, LaneId)> = Vec::new();

        for road in self.graph.roads() {
            let section_count = road.section_count();
            for (index, section) in road.sections().enumerate() {
                for lane in section.lanes() {
                    let own = LaneAddress::new(road.id, section.key(), lane.id);
                    for (end, link) in [
                        (LinkEnd::Predecessor, lane.predecessor),
                        (LinkEnd::Successor, lane.successor),
                    ] {
                        let LaneLink::Pending(raw) = link else {
                            continue;
                        };
                        match neighbor_address(&self.graph, road, index, section_count, end, raw) {
                            Some(target) => resolved.push((own, end, target)),
                            None => unresolved.push((own, end, raw)),
                        }
                    }
                }
            }
        }

        for (address, end, target) in resolved {
            if let Some(lane) = self.graph.lane_link_mut(&address) {
                end.set(lane, LaneLink::Resolved(target));
                self.report.resolved_lane_links += 1;
            }
        }
        for (address, end, raw) in unresolved {
            self.diagnostics.record(
                DiagnosticKind::UnresolvedLaneLink,
                format!(
                    "Straße {} s={} Spur {}: {} {} nicht auflösbar, Verweis bleibt leer",
                    address.road,
                    address.section.s(),
                    address.lane,
                    end.label(),
                    raw
                ),
            );
            if let Some(lane) = self.graph.lane_link_mut(&address) {
                end.set(lane, LaneLink::Unresolved(raw));
                self.report.unresolved_lane_links += 1;
            }
        }
    }
}

/// Adresse der Nachbarspur für einen Pending-Verweis, falls sie existiert.
fn neighbor_address(
    graph: &RoadGraph,
    road: &Road,
    section_index: usize,
    section_count: usize,
    end: LinkEnd,
    raw: LaneId,
) -> Option<LaneAddress> {
    match end {
        LinkEnd::Predecessor => {
            if section_index > 0 {
                // Vorige Sektion derselben Straße
                let section = road.section_by_index(section_index - 1)?;
                section.lane(raw)?;
                Some(LaneAddress::new(road.id, section.key(), raw))
            } else {
                // Erste Sektion: über den Straßen-Vorgänger in dessen letzte Sektion
                let neighbor_id = road.predecessor.resolved()?;
                boundary_address(graph, neighbor_id, raw, end)
            }
        }
        LinkEnd::Successor => {
            if section_index + 1 < section_count {
                // Nächste Sektion derselben Straße
                let section = road.section_by_index(section_index + 1)?;
                section.lane(raw)?;
                Some(LaneAddress::new(road.id, section.key(), raw))
            } else {
                // Letzte Sektion: über den Straßen-Nachfolger in dessen erste Sektion
                let neighbor_id = road.successor.resolved()?;
                boundary_address(graph, neighbor_id, raw, end)
            }
        }
    }
}

/// Spur-Adresse in der Grenz-Sektion einer Nachbarstraße: für Vorgänger
/// deren letzte Sektion, für Nachfolger deren erste.
fn boundary_address(
    graph: &RoadGraph,
    neighbor_id: RoadId,
    raw: LaneId,
    end: LinkEnd,
) -> Option<LaneAddress> {
    let neighbor = graph.road(neighbor_id)?;
    let section = match end {
        LinkEnd::Predecessor => neighbor.last_section()?,
        LinkEnd::Successor => neighbor.first_section()?,
    };
    section.lane(raw)?;
    Some(LaneAddress::new(neighbor_id, section.key(), raw))
}
