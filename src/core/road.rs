//! Straße mit geordneten Sektionen, Signalen und Segment-Verkettung.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::geometry::CubicPolynomial;
use super::lane_section::{LaneSection, SectionKey};
use super::signal::Signal;
use super::{JunctionId, RoadId, SignalId};

/// Sentinel-Wert für "gehört zu keiner Kreuzung"
pub const NO_JUNCTION: JunctionId = -1;

/// Verweis einer Straße auf ihren Vorgänger bzw. Nachfolger.
///
/// Wie bei [`crate::core::LaneLink`] sind rohe Ids und aufgelöste Verweise
/// getrennte Varianten; der erste Finalisierungs-Pass wandelt `Pending`
/// entweder in `Resolved` oder zurück auf `None` (mit Diagnose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoadLink {
    /// Kein Verweis (Sentinel -1 in der Quelle)
    #[default]
    None,
    /// Rohe Straßen-Id aus der Quelle, noch nicht aufgelöst
    Pending(i32),
    /// Aufgelöste Straßen-Id (Existenz beim Auflösen geprüft)
    Resolved(RoadId),
}

impl RoadLink {
    /// Erstellt den Verweis aus dem rohen Quellwert (negativ = kein Verweis).
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            RoadLink::None
        } else {
            RoadLink::Pending(raw)
        }
    }

    /// Aufgelöste Straßen-Id, falls vorhanden
    pub fn resolved(&self) -> Option<RoadId> {
        match self {
            RoadLink::Resolved(road_id) => Some(*road_id),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RoadLink::Resolved(_))
    }
}

/// Eine Straße des Graphen mit nach `s` geordneten Sektionen.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub id: RoadId,
    pub name: String,
    /// Bogenlänge dieses Segments (≥ 0)
    pub length: f64,
    /// Kreuzungs-Id, [`NO_JUNCTION`] falls die Straße keine Kreuzungs-Straße ist
    pub junction_id: JunctionId,
    pub predecessor: RoadLink,
    pub successor: RoadLink,
    sections: BTreeMap<SectionKey, LaneSection>,
    signals: IndexMap<SignalId, Signal>,
    /// Höhenprofil der Referenzlinie in Ankunftsreihenfolge
    pub elevation: Vec<CubicPolynomial>,
    /// Kumulierte Länge aller Vorgänger-Segmente derselben logischen Straße
    chain_offset: f64,
    /// Gesamtlänge der Segment-Kette, zu der dieses Segment gehört
    chain_length: f64,
}

impl Road {
    pub fn new(
        id: RoadId,
        name: String,
        length: f64,
        junction_id: JunctionId,
        predecessor: RoadLink,
        successor: RoadLink,
    ) -> Self {
        Self {
            id,
            name,
            length,
            junction_id,
            predecessor,
            successor,
            sections: BTreeMap::new(),
            signals: IndexMap::new(),
            elevation: Vec::new(),
            chain_offset: 0.0,
            chain_length: length,
        }
    }

    /// Liegt die Straße innerhalb einer Kreuzung?
    pub fn is_junction(&self) -> bool {
        self.junction_id != NO_JUNCTION
    }

    // ── Sektionen ──────────────────────────────────────────────

    /// Fügt eine Sektion ein, geordnet nach ihrem Start-Offset.
    /// Gibt `false` zurück falls bei diesem `s` schon eine Sektion liegt.
    pub fn add_section(&mut self, section: LaneSection) -> bool {
        let key = section.key();
        if self.sections.contains_key(&key) {
            return false;
        }
        self.sections.insert(key, section);
        true
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Sektion über ihren abgeleiteten Index in `s`-Reihenfolge
    pub fn section_by_index(&self, index: usize) -> Option<&LaneSection> {
        self.sections.values().nth(index)
    }

    pub fn section_by_index_mut(&mut self, index: usize) -> Option<&mut LaneSection> {
        self.sections.values_mut().nth(index)
    }

    pub fn section_at(&self, key: SectionKey) -> Option<&LaneSection> {
        self.sections.get(&key)
    }

    pub fn section_at_mut(&mut self, key: SectionKey) -> Option<&mut LaneSection> {
        self.sections.get_mut(&key)
    }

    /// Erste Sektion (niedrigstes `s`)
    pub fn first_section(&self) -> Option<&LaneSection> {
        self.sections.values().next()
    }

    /// Letzte Sektion (höchstes `s`)
    pub fn last_section(&self) -> Option<&LaneSection> {
        self.sections.values().next_back()
    }

    /// Iterator über alle Sektionen, aufsteigend nach `s`
    pub fn sections(&self) -> impl Iterator<Item = &LaneSection> {
        self.sections.values()
    }

    // ── Signale ────────────────────────────────────────────────

    /// Fügt ein Signal ein. Gibt `false` zurück falls die Id schon belegt ist.
    pub fn add_signal(&mut self, signal: Signal) -> bool {
        if self.signals.contains_key(&signal.id) {
            return false;
        }
        self.signals.insert(signal.id, signal);
        true
    }

    pub fn signal(&self, signal_id: SignalId) -> Option<&Signal> {
        self.signals.get(&signal_id)
    }

    pub fn signal_mut(&mut self, signal_id: SignalId) -> Option<&mut Signal> {
        self.signals.get_mut(&signal_id)
    }

    /// Iterator über alle Signale in Einfüge-Reihenfolge
    pub fn signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals.values()
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    // ── Segment-Kette ──────────────────────────────────────────

    /// Kumulierte Länge aller Vorgänger-Segmente (gesetzt im Finalize)
    pub fn chain_offset(&self) -> f64 {
        self.chain_offset
    }

    /// Gesamtlänge der Segment-Kette (gesetzt im Finalize)
    pub fn chain_length(&self) -> f64 {
        self.chain_length
    }

    pub(crate) fn set_chain(&mut self, offset: f64, total_length: f64) {
        self.chain_offset = offset;
        self.chain_length = total_length;
    }
}
