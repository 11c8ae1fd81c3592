//! Attributwerte, die an Spuren bzw. Straßen bei einem Längs-Offset `s` hängen.

/// Höhenversatz einer Spur (innere und äußere Kante)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneHeight {
    pub s: f64,
    pub inner: f64,
    pub outer: f64,
}

impl LaneHeight {
    pub fn new(s: f64, inner: f64, outer: f64) -> Self {
        Self { s, inner, outer }
    }
}

/// Oberflächenmaterial einer Spur
#[derive(Debug, Clone, PartialEq)]
pub struct LaneMaterial {
    pub s: f64,
    pub surface: String,
    pub friction: f64,
    pub roughness: f64,
}

impl LaneMaterial {
    pub fn new(s: f64, surface: String, friction: f64, roughness: f64) -> Self {
        Self {
            s,
            surface,
            friction,
            roughness,
        }
    }
}

/// Freitext-Regel für eine Spur (z.B. "no stopping at any time")
#[derive(Debug, Clone, PartialEq)]
pub struct LaneRule {
    pub s: f64,
    pub value: String,
}

impl LaneRule {
    pub fn new(s: f64, value: String) -> Self {
        Self { s, value }
    }
}

/// Sichtweiten einer Spur in vier Richtungen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneVisibility {
    pub s: f64,
    pub forward: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

impl LaneVisibility {
    pub fn new(s: f64, forward: f64, back: f64, left: f64, right: f64) -> Self {
        Self {
            s,
            forward,
            back,
            left,
            right,
        }
    }
}

/// Zulässige Höchstgeschwindigkeit ab `s`
#[derive(Debug, Clone, PartialEq)]
pub struct LaneVelocity {
    pub s: f64,
    pub max: f64,
    /// Einheit aus der Quelle (z.B. "m/s", "km/h"); wird nicht umgerechnet
    pub unit: String,
}

impl LaneVelocity {
    pub fn new(s: f64, max: f64, unit: String) -> Self {
        Self { s, max, unit }
    }
}

/// Zugangsbeschränkung einer Spur (z.B. "pedestrian")
#[derive(Debug, Clone, PartialEq)]
pub struct LaneAccess {
    pub s: f64,
    pub restriction: String,
}

impl LaneAccess {
    pub fn new(s: f64, restriction: String) -> Self {
        Self { s, restriction }
    }
}

/// Erlaubter Spurwechsel über eine Fahrbahnmarkierung hinweg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneChange {
    /// Kein Wechsel erlaubt
    #[default]
    None,
    /// Wechsel in Richtung aufsteigender Spur-Ids
    Increase,
    /// Wechsel in Richtung absteigender Spur-Ids
    Decrease,
    /// Wechsel in beide Richtungen
    Both,
}

impl LaneChange {
    /// Parst den Quelltext-Wert, unbekannte Werte ergeben `None`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "increase" => LaneChange::Increase,
            "decrease" => LaneChange::Decrease,
            "both" => LaneChange::Both,
            _ => LaneChange::None,
        }
    }
}

/// Fahrbahnmarkierung einer Spur, inklusive nachgereichter Typ-Linien
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRecord {
    pub s: f64,
    /// Id der Markierung, Anker für nachfolgende Typ-Linien-Ereignisse
    pub mark_id: u32,
    pub kind: String,
    pub weight: String,
    pub color: String,
    pub material: String,
    pub width: f64,
    pub lane_change: LaneChange,
    pub height: f64,
    pub type_name: String,
    pub type_width: f64,
    /// Einzelne Linien des Markierungstyps (progressiv angehängt)
    pub lines: Vec<MarkTypeLine>,
}

impl MarkRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        s: f64,
        mark_id: u32,
        kind: String,
        weight: String,
        color: String,
        material: String,
        width: f64,
        lane_change: LaneChange,
        height: f64,
        type_name: String,
        type_width: f64,
    ) -> Self {
        Self {
            s,
            mark_id,
            kind,
            weight,
            color,
            material,
            width,
            lane_change,
            height,
            type_name,
            type_width,
            lines: Vec::new(),
        }
    }
}

/// Einzelne Linie innerhalb eines Markierungstyps
#[derive(Debug, Clone, PartialEq)]
pub struct MarkTypeLine {
    pub s: f64,
    pub length: f64,
    pub space: f64,
    pub t_offset: f64,
    pub rule: String,
    pub width: f64,
}

impl MarkTypeLine {
    pub fn new(s: f64, length: f64, space: f64, t_offset: f64, rule: String, width: f64) -> Self {
        Self {
            s,
            length,
            space,
            t_offset,
            rule,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_change_parse_case_insensitive() {
        assert_eq!(LaneChange::parse("Increase"), LaneChange::Increase);
        assert_eq!(LaneChange::parse("DECREASE"), LaneChange::Decrease);
        assert_eq!(LaneChange::parse("both"), LaneChange::Both);
    }

    #[test]
    fn test_lane_change_parse_unknown_is_none() {
        assert_eq!(LaneChange::parse("sideways"), LaneChange::None);
        assert_eq!(LaneChange::parse(""), LaneChange::None);
    }
}
