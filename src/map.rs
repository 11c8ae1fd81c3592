//! Die finalisierte, unveränderliche Map als Ergebnis des Builds.

use crate::core::{
    Junction, JunctionId, Lane, LaneAddress, LaneId, Road, RoadGraph, RoadId, SectionLocator,
};
use crate::diagnostics::{BuildReport, Diagnostics};

/// Unveränderlicher Straßengraph nach der Finalisierung.
///
/// Entsteht per Move aus dem Graphen des Builders, nie als Kopie. Alle
/// Zugriffe sind lesend; aufgelöste Spur-Adressen bleiben für die gesamte
/// Lebensdauer der Map gültig, weil keine Entität je entfernt wird.
#[derive(Debug)]
pub struct Map {
    graph: RoadGraph,
    diagnostics: Diagnostics,
    report: BuildReport,
}

impl Map {
    pub(crate) fn new(graph: RoadGraph, diagnostics: Diagnostics, report: BuildReport) -> Self {
        Self {
            graph,
            diagnostics,
            report,
        }
    }

    pub fn road(&self, road_id: RoadId) -> Option<&Road> {
        self.graph.road(road_id)
    }

    pub fn junction(&self, junction_id: JunctionId) -> Option<&Junction> {
        self.graph.junction(junction_id)
    }

    /// Iterator über alle Straßen (Reihenfolge unbestimmt)
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.graph.roads()
    }

    /// Iterator über alle Kreuzungen (Reihenfolge unbestimmt)
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.graph.junctions()
    }

    pub fn road_count(&self) -> usize {
        self.graph.road_count()
    }

    pub fn junction_count(&self) -> usize {
        self.graph.junction_count()
    }

    /// Spur hinter einer aufgelösten Adresse
    pub fn lane(&self, address: &LaneAddress) -> Option<&Lane> {
        self.graph.lane(address)
    }

    /// Schlägt eine Spur nach und liefert ihre dauerhafte Adresse.
    pub fn lane_address(
        &self,
        road_id: RoadId,
        locator: SectionLocator,
        lane_id: LaneId,
    ) -> Option<LaneAddress> {
        self.graph.lane_address(road_id, locator, lane_id)
    }

    /// Alle während Ingestion und Finalisierung gesammelten Diagnosen
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Zusammenfassung des Build-Laufs
    pub fn report(&self) -> &BuildReport {
        &self.report
    }
}
