//! Sektion einer Straße: Querschnitt aller Spuren ab einem Längs-Offset `s`.

use std::collections::BTreeMap;

use super::geometry::CubicPolynomial;
use super::lane::Lane;
use super::LaneId;

/// Total geordneter Schlüssel über dem Start-Offset `s` einer Sektion.
///
/// `f64` ist selbst nicht `Ord`; der Schlüssel ordnet über `total_cmp`,
/// damit Sektionen in einer `BTreeMap` streng aufsteigend nach `s` liegen
/// und ein Sektions-Index daraus abgeleitet statt separat gepflegt wird.
#[derive(Debug, Clone, Copy)]
pub struct SectionKey(f64);

impl SectionKey {
    pub fn new(s: f64) -> Self {
        Self(s)
    }

    /// Start-Offset `s` der Sektion
    pub fn s(&self) -> f64 {
        self.0
    }
}

impl PartialEq for SectionKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for SectionKey {}

impl PartialOrd for SectionKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SectionKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Querschnitt einer Straße über einen zusammenhängenden `s`-Bereich.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSection {
    s: f64,
    /// Seitlicher Versatz der Referenzlinie über diese Sektion
    pub lane_offset: CubicPolynomial,
    lanes: BTreeMap<LaneId, Lane>,
}

impl LaneSection {
    /// Erstellt eine leere Sektion; der Start-Offset kommt aus der Offset-Kurve.
    pub fn new(lane_offset: CubicPolynomial) -> Self {
        Self {
            s: lane_offset.s(),
            lane_offset,
            lanes: BTreeMap::new(),
        }
    }

    /// Start-Offset `s` der Sektion
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Sortierschlüssel der Sektion innerhalb ihrer Straße
    pub fn key(&self) -> SectionKey {
        SectionKey::new(self.s)
    }

    /// Fügt eine Spur ein. Gibt `false` zurück falls die Id schon belegt ist.
    pub fn add_lane(&mut self, lane: Lane) -> bool {
        if self.lanes.contains_key(&lane.id) {
            return false;
        }
        self.lanes.insert(lane.id, lane);
        true
    }

    pub fn lane(&self, lane_id: LaneId) -> Option<&Lane> {
        self.lanes.get(&lane_id)
    }

    pub fn lane_mut(&mut self, lane_id: LaneId) -> Option<&mut Lane> {
        self.lanes.get_mut(&lane_id)
    }

    /// Iterator über alle Spuren, aufsteigend nach Spur-Id
    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.values()
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_total_order() {
        let mut keys = vec![
            SectionKey::new(25.0),
            SectionKey::new(0.0),
            SectionKey::new(100.5),
        ];
        keys.sort();
        assert_eq!(keys[0].s(), 0.0);
        assert_eq!(keys[2].s(), 100.5);
        assert_eq!(SectionKey::new(25.0), SectionKey::new(25.0));
    }

    #[test]
    fn test_add_lane_rejects_duplicate_id() {
        use crate::core::lane::LaneType;
        let mut section = LaneSection::new(CubicPolynomial::new(0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(section.add_lane(Lane::new(-1, LaneType::Driving, false, 0, 0)));
        assert!(!section.add_lane(Lane::new(-1, LaneType::Sidewalk, false, 0, 0)));
        assert_eq!(section.lane_count(), 1);
        let kept = section.lane(-1).expect("Spur -1 erwartet");
        assert_eq!(kept.lane_type, LaneType::Driving);
    }
}
