//! OpenDRIVE Graph Builder Library.
//! Baut aus Konstruktionsereignissen einen querverlinkten Straßengraphen;
//! Querverweise werden erst in der Finalisierung aufgelöst (Soft-Fail-Politik).

pub mod builder;
pub mod core;
pub mod diagnostics;
pub mod event;
pub mod map;

pub use builder::MapBuilder;
pub use core::{
    CubicPolynomial, Junction, JunctionConnection, Lane, LaneAddress, LaneChange, LaneLink,
    LaneSection, LaneType, Road, RoadGraph, RoadLink, SectionKey, SectionLocator, Signal,
    SignalSpec, Validity, NO_JUNCTION,
};
pub use core::{ConnectionId, JunctionId, LaneId, RoadId, SignalId};
pub use diagnostics::{BuildReport, Diagnostic, DiagnosticKind, Diagnostics};
pub use event::RoadEvent;
pub use map::Map;
