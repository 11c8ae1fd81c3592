//! Core-Domänentypen: Straßen, Sektionen, Spuren, Kreuzungen, Signale.

pub mod attributes;
pub mod geometry;
pub mod junction;
pub mod lane;
pub mod lane_section;
pub mod road;
pub mod road_graph;
pub mod signal;

/// Id einer Straße
pub type RoadId = u32;
/// Id einer Kreuzung (negativ nur als Sentinel in Rohdaten)
pub type JunctionId = i32;
/// Id einer Verbindung innerhalb einer Kreuzung
pub type ConnectionId = u32;
/// Vorzeichenbehaftete Spur-Id (negativ = rechts, positiv = links, 0 = Referenzlinie)
pub type LaneId = i32;
/// Id eines Signals innerhalb seiner Straße
pub type SignalId = u32;

pub use attributes::{
    LaneAccess, LaneChange, LaneHeight, LaneMaterial, LaneRule, LaneVelocity, LaneVisibility,
    MarkRecord, MarkTypeLine,
};
pub use geometry::CubicPolynomial;
pub use junction::{Junction, JunctionConnection};
pub use lane::{Lane, LaneAddress, LaneLink, LaneType};
pub use lane_section::{LaneSection, SectionKey};
pub use road::{Road, RoadLink, NO_JUNCTION};
pub use road_graph::{RoadGraph, SectionLocator};
pub use signal::{Signal, SignalSpec, Validity};
