//! Einzelne Spur mit Attributen und Vorgänger-/Nachfolger-Verweisen.

use super::attributes::{
    LaneAccess, LaneHeight, LaneMaterial, LaneRule, LaneVelocity, LaneVisibility, MarkRecord,
};
use super::geometry::CubicPolynomial;
use super::lane_section::SectionKey;
use super::{LaneId, RoadId};

/// Kategorie einer Spur, aus dem Quelltext-Wert geparst.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LaneType {
    #[default]
    Driving,
    Stop,
    Shoulder,
    Biking,
    Sidewalk,
    Border,
    Parking,
    Median,
    Rail,
    None,
    /// Unbekannte Kategorie, Originaltext bleibt erhalten
    Other(String),
}

impl LaneType {
    /// Parst den Quelltext-Wert, unbekannte Werte landen in `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "driving" => LaneType::Driving,
            "stop" => LaneType::Stop,
            "shoulder" => LaneType::Shoulder,
            "biking" => LaneType::Biking,
            "sidewalk" => LaneType::Sidewalk,
            "border" => LaneType::Border,
            "parking" => LaneType::Parking,
            "median" => LaneType::Median,
            "rail" => LaneType::Rail,
            "none" => LaneType::None,
            _ => LaneType::Other(raw.to_string()),
        }
    }
}

/// Adresse einer Spur im Straßengraphen: Straße, Sektionsschlüssel, Spur-Id.
///
/// Einträge werden nie entfernt, eine einmal aufgelöste Adresse bleibt
/// für die Lebensdauer der Map gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAddress {
    pub road: RoadId,
    pub section: SectionKey,
    pub lane: LaneId,
}

impl LaneAddress {
    pub fn new(road: RoadId, section: SectionKey, lane: LaneId) -> Self {
        Self {
            road,
            section,
            lane,
        }
    }
}

/// Verweis einer Spur auf ihre Nachbarspur in Längsrichtung.
///
/// Rohe Ids und aufgelöste Adressen sind getrennte Varianten und teilen
/// sich nie denselben Speicherplatz. Die Umwandlung `Pending` nach
/// `Resolved` bzw. `Unresolved` passiert ausschließlich im zweiten
/// Finalisierungs-Pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LaneLink {
    /// Kein Nachbar (roher Wert 0)
    #[default]
    None,
    /// Roher Nachbar-Id aus der Quelle, noch nicht aufgelöst
    Pending(LaneId),
    /// Aufgelöste Spur-Adresse
    Resolved(LaneAddress),
    /// Auflösung fehlgeschlagen, der Verweis bleibt absichtlich leer
    Unresolved(LaneId),
}

impl LaneLink {
    /// Erstellt den Verweis aus dem rohen Quellwert (0 = kein Nachbar).
    pub fn from_raw(raw: LaneId) -> Self {
        if raw == 0 {
            LaneLink::None
        } else {
            LaneLink::Pending(raw)
        }
    }

    /// Aufgelöste Adresse, falls vorhanden
    pub fn resolved(&self) -> Option<LaneAddress> {
        match self {
            LaneLink::Resolved(address) => Some(*address),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LaneLink::Resolved(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, LaneLink::Unresolved(_))
    }
}

/// Eine Spur innerhalb einer Sektion.
///
/// Das Vorzeichen der Id kodiert die Straßenseite (negativ = rechts in
/// Fahrtrichtung, positiv = links), Id 0 ist die Referenzlinie selbst.
/// Attribute werden pro Familie in Ankunftsreihenfolge gesammelt.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub id: LaneId,
    pub lane_type: LaneType,
    /// "level"-Flag aus der Quelle (Spur folgt nicht dem Superelevations-Profil)
    pub level: bool,
    pub predecessor: LaneLink,
    pub successor: LaneLink,
    pub widths: Vec<CubicPolynomial>,
    pub borders: Vec<CubicPolynomial>,
    pub offsets: Vec<CubicPolynomial>,
    pub heights: Vec<LaneHeight>,
    pub materials: Vec<LaneMaterial>,
    pub rules: Vec<LaneRule>,
    pub visibilities: Vec<LaneVisibility>,
    pub velocities: Vec<LaneVelocity>,
    pub accesses: Vec<LaneAccess>,
    pub marks: Vec<MarkRecord>,
}

impl Lane {
    /// Erstellt eine Spur mit rohen Nachbar-Ids (0 = kein Nachbar).
    pub fn new(
        id: LaneId,
        lane_type: LaneType,
        level: bool,
        predecessor_raw: LaneId,
        successor_raw: LaneId,
    ) -> Self {
        Self {
            id,
            lane_type,
            level,
            predecessor: LaneLink::from_raw(predecessor_raw),
            successor: LaneLink::from_raw(successor_raw),
            widths: Vec::new(),
            borders: Vec::new(),
            offsets: Vec::new(),
            heights: Vec::new(),
            materials: Vec::new(),
            rules: Vec::new(),
            visibilities: Vec::new(),
            velocities: Vec::new(),
            accesses: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// Jüngste Markierung mit der angegebenen Id (Anker für Typ-Linien)
    pub fn mark_mut(&mut self, mark_id: u32) -> Option<&mut MarkRecord> {
        self.marks.iter_mut().rev().find(|m| m.mark_id == mark_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_link_from_raw() {
        assert_eq!(LaneLink::from_raw(0), LaneLink::None);
        assert_eq!(LaneLink::from_raw(-1), LaneLink::Pending(-1));
        assert_eq!(LaneLink::from_raw(2), LaneLink::Pending(2));
    }

    #[test]
    fn test_lane_type_parse() {
        assert_eq!(LaneType::parse("driving"), LaneType::Driving);
        assert_eq!(LaneType::parse("Sidewalk"), LaneType::Sidewalk);
        assert_eq!(
            LaneType::parse("specialUse"),
            LaneType::Other("specialUse".to_string())
        );
    }

    #[test]
    fn test_mark_mut_findet_juengste_markierung() {
        use crate::core::attributes::LaneChange;
        let mut lane = Lane::new(-1, LaneType::Driving, false, 0, 0);
        lane.marks.push(MarkRecord::new(
            0.0,
            7,
            "solid".into(),
            "standard".into(),
            "white".into(),
            String::new(),
            0.12,
            LaneChange::None,
            0.0,
            String::new(),
            0.0,
        ));
        lane.marks.push(MarkRecord::new(
            50.0,
            7,
            "broken".into(),
            "standard".into(),
            "white".into(),
            String::new(),
            0.12,
            LaneChange::Both,
            0.0,
            String::new(),
            0.0,
        ));

        let mark = lane.mark_mut(7).expect("Markierung 7 erwartet");
        assert_eq!(mark.kind, "broken");
        assert!(lane.mark_mut(9).is_none());
    }
}
