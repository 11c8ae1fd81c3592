//! Der MapBuilder: nimmt Konstruktionsereignisse entgegen und baut den Graphen.

mod finalize;

use crate::core::{
    ConnectionId, CubicPolynomial, Junction, JunctionConnection, JunctionId, Lane, LaneAccess,
    LaneAddress, LaneChange, LaneHeight, LaneId, LaneMaterial, LaneRule, LaneSection, LaneType,
    LaneVelocity, LaneVisibility, MarkRecord, MarkTypeLine, Road, RoadGraph, RoadId, RoadLink,
    SectionLocator, Signal, SignalId, SignalSpec, Validity,
};
use crate::diagnostics::{BuildReport, DiagnosticKind, Diagnostics};
use crate::map::Map;

/// Ergebnis der internen Spur-Zieladressierung für Attribut-Ereignisse.
enum LaneLookup {
    Found,
    NoRoad,
    NoSection,
    NoLane,
}

/// Baut den Straßengraphen inkrementell aus Konstruktionsereignissen auf.
///
/// Jede Ingestion-Methode erzeugt entweder eine neue Entität oder hängt
/// Daten an eine bestehende an. Ereignisse, deren Ziel nicht existiert,
/// werden mit Diagnose verworfen und brechen den Aufbau nie ab.
/// Querverweise zwischen Entitäten bleiben bis [`MapBuilder::build`] rohe
/// Ids; erst die Finalisierung löst sie auf.
#[derive(Debug, Default)]
pub struct MapBuilder {
    graph: RoadGraph,
    diagnostics: Diagnostics,
    report: BuildReport,
}

impl MapBuilder {
    /// Erstellt einen leeren Builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft ein Ereignis mit Diagnose.
    fn drop_event(&mut self, kind: DiagnosticKind, message: String) {
        self.report.dropped_events += 1;
        self.diagnostics.record(kind, message);
    }

    // ── Straßen, Sektionen, Spuren ─────────────────────────────

    /// Erstellt eine Straße. Vorgänger/Nachfolger bleiben rohe Ids
    /// (Sentinel -1 = kein Verweis); die Ziele müssen noch nicht existieren.
    pub fn add_road(
        &mut self,
        road_id: RoadId,
        name: &str,
        length: f64,
        junction_id: JunctionId,
        predecessor_raw: i32,
        successor_raw: i32,
    ) {
        let road = Road::new(
            road_id,
            name.to_string(),
            length,
            junction_id,
            RoadLink::from_raw(predecessor_raw),
            RoadLink::from_raw(successor_raw),
        );
        if !self.graph.add_road(road) {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!("Straße {} existiert bereits, Ereignis verworfen", road_id),
            );
        }
    }

    /// Fügt einer Straße eine Sektion hinzu, geordnet nach dem Start-Offset
    /// der Offset-Kurve.
    pub fn add_road_section(&mut self, road_id: RoadId, lane_offset: CubicPolynomial) {
        let s = lane_offset.s();
        if !self.graph.contains_road(road_id) {
            self.drop_event(
                DiagnosticKind::UnknownRoad,
                format!("Straße {} nicht gefunden (Sektion bei s={})", road_id, s),
            );
            return;
        }
        let inserted = self
            .graph
            .road_mut(road_id)
            .map_or(false, |road| road.add_section(LaneSection::new(lane_offset)));
        if !inserted {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!("Straße {}: Sektion bei s={} existiert bereits", road_id, s),
            );
        }
    }

    /// Fügt einer Sektion eine Spur hinzu. Die rohen Nachbar-Ids
    /// (0 = kein Nachbar) werden als Pending-Verweise gespeichert und sind
    /// vor der Finalisierung nicht als Referenzen nutzbar.
    #[allow(clippy::too_many_arguments)]
    pub fn add_road_section_lane(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        lane_type: &str,
        level: bool,
        predecessor_raw: LaneId,
        successor_raw: LaneId,
    ) {
        let section_count = self.graph.road(road_id).map(|r| r.section_count());
        let Some(section_count) = section_count else {
            self.drop_event(
                DiagnosticKind::UnknownRoad,
                format!("Straße {} nicht gefunden (Spur {})", road_id, lane_id),
            );
            return;
        };
        if section_index >= section_count {
            self.drop_event(
                DiagnosticKind::UnknownSection,
                format!(
                    "Straße {}: Sektion {} nicht gefunden (Spur {})",
                    road_id, section_index, lane_id
                ),
            );
            return;
        }
        let lane = Lane::new(
            lane_id,
            LaneType::parse(lane_type),
            level,
            predecessor_raw,
            successor_raw,
        );
        let inserted = match self.graph.road_mut(road_id) {
            Some(road) => road
                .section_by_index_mut(section_index)
                .map_or(false, |section| section.add_lane(lane)),
            None => false,
        };
        if !inserted {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!(
                    "Straße {} Sektion {}: Spur {} existiert bereits",
                    road_id, section_index, lane_id
                ),
            );
        }
    }

    // ── Spur-Attribute ─────────────────────────────────────────

    /// Prüft die Existenz des Attribut-Ziels ohne aktiven Borrow.
    fn locate_lane(&self, road_id: RoadId, section_index: usize, lane_id: LaneId) -> LaneLookup {
        let Some(road) = self.graph.road(road_id) else {
            return LaneLookup::NoRoad;
        };
        let Some(section) = road.section_by_index(section_index) else {
            return LaneLookup::NoSection;
        };
        if section.lane(lane_id).is_none() {
            return LaneLookup::NoLane;
        }
        LaneLookup::Found
    }

    /// Zielspur eines Attribut-Ereignisses; verwirft das Ereignis mit
    /// Diagnose, wenn Straße, Sektion oder Spur fehlen.
    fn attachment_lane(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        what: &str,
    ) -> Option<&mut Lane> {
        match self.locate_lane(road_id, section_index, lane_id) {
            LaneLookup::Found => self.graph.lane_at_mut(road_id, section_index, lane_id),
            LaneLookup::NoRoad => {
                self.drop_event(
                    DiagnosticKind::UnknownRoad,
                    format!("Straße {} nicht gefunden ({})", road_id, what),
                );
                None
            }
            LaneLookup::NoSection => {
                self.drop_event(
                    DiagnosticKind::UnknownSection,
                    format!(
                        "Straße {}: Sektion {} nicht gefunden ({})",
                        road_id, section_index, what
                    ),
                );
                None
            }
            LaneLookup::NoLane => {
                self.drop_event(
                    DiagnosticKind::UnknownLane,
                    format!(
                        "Straße {} Sektion {}: Spur {} nicht gefunden ({})",
                        road_id, section_index, lane_id, what
                    ),
                );
                None
            }
        }
    }

    /// Spurbreite als kubisches Polynom ab `s`
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_width(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Spurbreite") {
            lane.widths.push(CubicPolynomial::new(s, a, b, c, d));
        }
    }

    /// Spurrand als kubisches Polynom ab `s`
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_border(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Spurrand") {
            lane.borders.push(CubicPolynomial::new(s, a, b, c, d));
        }
    }

    /// Seitlicher Spur-Versatz als kubisches Polynom ab `s`
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_offset(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Spur-Versatz") {
            lane.offsets.push(CubicPolynomial::new(s, a, b, c, d));
        }
    }

    /// Höhenversatz der Spurkanten ab `s`
    pub fn add_lane_height(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        inner: f64,
        outer: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Spurhöhe") {
            lane.heights.push(LaneHeight::new(s, inner, outer));
        }
    }

    /// Oberflächenmaterial ab `s`
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_material(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        surface: &str,
        friction: f64,
        roughness: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Material") {
            lane.materials
                .push(LaneMaterial::new(s, surface.to_string(), friction, roughness));
        }
    }

    /// Freitext-Regel ab `s`
    pub fn add_lane_rule(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        value: &str,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Regel") {
            lane.rules.push(LaneRule::new(s, value.to_string()));
        }
    }

    /// Sichtweiten ab `s`
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_visibility(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        forward: f64,
        back: f64,
        left: f64,
        right: f64,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Sichtweite") {
            lane.visibilities
                .push(LaneVisibility::new(s, forward, back, left, right));
        }
    }

    /// Höchstgeschwindigkeit ab `s`
    pub fn add_lane_velocity(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        max: f64,
        unit: &str,
    ) {
        if let Some(lane) =
            self.attachment_lane(road_id, section_index, lane_id, "Geschwindigkeit")
        {
            lane.velocities
                .push(LaneVelocity::new(s, max, unit.to_string()));
        }
    }

    /// Zugangsbeschränkung ab `s`
    pub fn add_lane_access(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        restriction: &str,
    ) {
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Zugang") {
            lane.accesses
                .push(LaneAccess::new(s, restriction.to_string()));
        }
    }

    /// Fahrbahnmarkierung ab `s`; `lane_change` wird aus dem Quelltext geparst.
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_mark(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        mark_id: u32,
        s: f64,
        kind: &str,
        weight: &str,
        color: &str,
        material: &str,
        width: f64,
        lane_change: &str,
        height: f64,
        type_name: &str,
        type_width: f64,
    ) {
        let mark = MarkRecord::new(
            s,
            mark_id,
            kind.to_string(),
            weight.to_string(),
            color.to_string(),
            material.to_string(),
            width,
            LaneChange::parse(lane_change),
            height,
            type_name.to_string(),
            type_width,
        );
        if let Some(lane) = self.attachment_lane(road_id, section_index, lane_id, "Markierung") {
            lane.marks.push(mark);
        }
    }

    /// Typ-Linie zu einer zuvor gemeldeten Markierung (Anker: `mark_id`).
    #[allow(clippy::too_many_arguments)]
    pub fn add_lane_mark_type_line(
        &mut self,
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        mark_id: u32,
        length: f64,
        space: f64,
        t_offset: f64,
        s: f64,
        rule: &str,
        width: f64,
    ) {
        let line = MarkTypeLine::new(s, length, space, t_offset, rule.to_string(), width);
        let attached = match self.attachment_lane(road_id, section_index, lane_id, "Typ-Linie") {
            Some(lane) => match lane.mark_mut(mark_id) {
                Some(mark) => {
                    mark.lines.push(line);
                    true
                }
                None => false,
            },
            // Diagnose bereits erfasst
            None => return,
        };
        if !attached {
            self.drop_event(
                DiagnosticKind::UnknownMarkRecord,
                format!(
                    "Straße {} Sektion {} Spur {}: Markierung {} nicht gefunden (Typ-Linie)",
                    road_id, section_index, lane_id, mark_id
                ),
            );
        }
    }

    /// Höhenprofil-Stützpunkt der Referenzlinie
    pub fn add_road_elevation_profile(
        &mut self,
        road_id: RoadId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) {
        let appended = self
            .graph
            .road_mut(road_id)
            .map(|road| road.elevation.push(CubicPolynomial::new(s, a, b, c, d)))
            .is_some();
        if !appended {
            self.drop_event(
                DiagnosticKind::UnknownRoad,
                format!("Straße {} nicht gefunden (Höhenprofil)", road_id),
            );
        }
    }

    // ── Kreuzungen ─────────────────────────────────────────────

    /// Erstellt eine Kreuzung.
    pub fn add_junction(&mut self, junction_id: JunctionId, name: &str) {
        if !self
            .graph
            .add_junction(Junction::new(junction_id, name.to_string()))
        {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!("Kreuzung {} existiert bereits, Ereignis verworfen", junction_id),
            );
        }
    }

    /// Erstellt eine Verbindung innerhalb einer Kreuzung.
    pub fn add_connection(
        &mut self,
        junction_id: JunctionId,
        connection_id: ConnectionId,
        incoming_road: RoadId,
        connecting_road: RoadId,
    ) {
        if !self.graph.contains_junction(junction_id) {
            self.drop_event(
                DiagnosticKind::UnknownJunction,
                format!(
                    "Kreuzung {} nicht gefunden (Verbindung {})",
                    junction_id, connection_id
                ),
            );
            return;
        }
        let inserted = self.graph.junction_mut(junction_id).map_or(false, |junction| {
            junction.add_connection(JunctionConnection::new(
                connection_id,
                incoming_road,
                connecting_road,
            ))
        });
        if !inserted {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!(
                    "Kreuzung {}: Verbindung {} existiert bereits",
                    junction_id, connection_id
                ),
            );
        }
    }

    /// Hängt ein Spur-Paar an eine bestehende Verbindung an.
    pub fn add_lane_link(
        &mut self,
        junction_id: JunctionId,
        connection_id: ConnectionId,
        from: LaneId,
        to: LaneId,
    ) {
        let appended = self
            .graph
            .junction_mut(junction_id)
            .and_then(|junction| junction.connection_mut(connection_id))
            .map(|connection| connection.add_lane_link(from, to))
            .is_some();
        if !appended {
            if self.graph.contains_junction(junction_id) {
                self.drop_event(
                    DiagnosticKind::UnknownConnection,
                    format!(
                        "Kreuzung {}: Verbindung {} nicht gefunden (Spur-Paar {}/{})",
                        junction_id, connection_id, from, to
                    ),
                );
            } else {
                self.drop_event(
                    DiagnosticKind::UnknownJunction,
                    format!(
                        "Kreuzung {} nicht gefunden (Spur-Paar {}/{})",
                        junction_id, from, to
                    ),
                );
            }
        }
    }

    // ── Signale ────────────────────────────────────────────────

    /// Fügt ein Signal in die Signal-Map der Straße ein.
    pub fn add_signal(&mut self, road_id: RoadId, signal_id: SignalId, spec: SignalSpec) {
        if !self.graph.contains_road(road_id) {
            self.drop_event(
                DiagnosticKind::UnknownRoad,
                format!("Straße {} nicht gefunden (Signal {})", road_id, signal_id),
            );
            return;
        }
        let signal = Signal::new(road_id, signal_id, spec);
        let inserted = self
            .graph
            .road_mut(road_id)
            .map_or(false, |road| road.add_signal(signal));
        if !inserted {
            self.drop_event(
                DiagnosticKind::DuplicateEntity,
                format!("Straße {}: Signal {} existiert bereits", road_id, signal_id),
            );
        }
    }

    /// Hängt einen Gültigkeitsbereich an ein bestehendes Signal an.
    pub fn add_signal_validity(
        &mut self,
        road_id: RoadId,
        signal_id: SignalId,
        from_lane: LaneId,
        to_lane: LaneId,
    ) {
        if !self.graph.contains_road(road_id) {
            self.drop_event(
                DiagnosticKind::UnknownRoad,
                format!(
                    "Straße {} nicht gefunden (Gültigkeit für Signal {})",
                    road_id, signal_id
                ),
            );
            return;
        }
        let appended = self
            .graph
            .road_mut(road_id)
            .and_then(|road| road.signal_mut(signal_id))
            .map(|signal| {
                signal
                    .validities
                    .push(Validity::new(signal_id, from_lane, to_lane))
            })
            .is_some();
        if !appended {
            self.drop_event(
                DiagnosticKind::UnknownSignal,
                format!(
                    "Straße {}: Signal {} nicht gefunden (Gültigkeit {}..{})",
                    road_id, signal_id, from_lane, to_lane
                ),
            );
        }
    }

    // ── Abfragen und Abschluss ─────────────────────────────────

    /// Schlägt eine Spur nach und liefert ihre dauerhafte Adresse.
    pub fn lane_address(
        &self,
        road_id: RoadId,
        locator: SectionLocator,
        lane_id: LaneId,
    ) -> Option<LaneAddress> {
        self.graph.lane_address(road_id, locator, lane_id)
    }

    /// Bisher gesammelte Diagnosen (während der Ingestion abfragbar)
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Finalisiert den Graphen und übergibt ihn als unveränderliche Map.
    ///
    /// Läuft beide Auflösungs-Pässe genau einmal: erst Straßen-Verkettung
    /// und Kettenlängen, dann Spur-Verweise. Schlägt nie fehl; Lücken im
    /// Eingangsmaterial landen als Diagnosen in der Map.
    pub fn build(mut self) -> Map {
        self.link_road_segments();
        self.resolve_lane_links();
        Map::new(self.graph, self.diagnostics, self.report)
    }
}
