//! Signale (Schilder, Ampeln) als Metadaten am Straßenrand.

use serde::{Deserialize, Serialize};

use super::{LaneId, RoadId, SignalId};

/// Skalare Felder eines Signals, wie sie das Quellformat liefert.
///
/// Textuelle Felder (Orientierung, Land, Typ) bleiben unausgewertet; die
/// Interpretation ist Sache des Konsumenten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalSpec {
    /// Längsposition entlang der Referenzlinie
    pub s: f64,
    /// Querposition relativ zur Referenzlinie
    pub t: f64,
    pub name: String,
    /// "yes"/"no" aus der Quelle (dynamisches Signal, z.B. Ampel)
    pub dynamic: String,
    pub orientation: String,
    pub z_offset: f64,
    pub country: String,
    pub kind: String,
    pub subkind: String,
    pub value: f64,
    pub unit: String,
    pub height: f64,
    pub width: f64,
    pub text: String,
    pub h_offset: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// Gültigkeitsbereich eines Signals über ein Spur-Id-Intervall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub signal_id: SignalId,
    pub from_lane: LaneId,
    pub to_lane: LaneId,
}

impl Validity {
    pub fn new(signal_id: SignalId, from_lane: LaneId, to_lane: LaneId) -> Self {
        Self {
            signal_id,
            from_lane,
            to_lane,
        }
    }
}

/// Signal an einer Straße, eindeutig pro Straße über seine Id.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub road_id: RoadId,
    pub id: SignalId,
    pub spec: SignalSpec,
    /// Gültigkeitsbereiche in Ankunftsreihenfolge (roh, keine Spur-Auflösung)
    pub validities: Vec<Validity>,
}

impl Signal {
    pub fn new(road_id: RoadId, id: SignalId, spec: SignalSpec) -> Self {
        Self {
            road_id,
            id,
            spec,
            validities: Vec::new(),
        }
    }
}
