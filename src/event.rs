//! Typisierte Konstruktionsereignisse: aufzeichenbar, wieder einspielbar.

use serde::{Deserialize, Serialize};

use crate::builder::MapBuilder;
use crate::core::{
    ConnectionId, CubicPolynomial, JunctionId, LaneId, RoadId, SignalId, SignalSpec,
};

/// Ein Konstruktionsereignis des Parsers, eine Variante pro Ingestion-Aufruf.
///
/// Der Strom ist als JSON serialisierbar, damit sich Eingaben aufzeichnen
/// und ohne den Parser wieder einspielen lassen (Replays, Regressionstests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoadEvent {
    Road {
        id: RoadId,
        name: String,
        length: f64,
        junction_id: JunctionId,
        predecessor: i32,
        successor: i32,
    },
    RoadSection {
        road_id: RoadId,
        lane_offset: CubicPolynomial,
    },
    SectionLane {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        lane_type: String,
        level: bool,
        predecessor: LaneId,
        successor: LaneId,
    },
    LaneWidth {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    LaneBorder {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    LaneOffset {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    LaneHeight {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        inner: f64,
        outer: f64,
    },
    LaneMaterial {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        surface: String,
        friction: f64,
        roughness: f64,
    },
    LaneRule {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        value: String,
    },
    LaneVisibility {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        forward: f64,
        back: f64,
        left: f64,
        right: f64,
    },
    LaneVelocity {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        max: f64,
        unit: String,
    },
    LaneAccess {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        s: f64,
        restriction: String,
    },
    LaneMark {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        mark_id: u32,
        s: f64,
        kind: String,
        weight: String,
        color: String,
        material: String,
        width: f64,
        lane_change: String,
        height: f64,
        type_name: String,
        type_width: f64,
    },
    LaneMarkTypeLine {
        road_id: RoadId,
        section_index: usize,
        lane_id: LaneId,
        mark_id: u32,
        length: f64,
        space: f64,
        t_offset: f64,
        s: f64,
        rule: String,
        width: f64,
    },
    ElevationProfile {
        road_id: RoadId,
        s: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    Junction {
        id: JunctionId,
        name: String,
    },
    Connection {
        junction_id: JunctionId,
        connection_id: ConnectionId,
        incoming_road: RoadId,
        connecting_road: RoadId,
    },
    LaneLink {
        junction_id: JunctionId,
        connection_id: ConnectionId,
        from: LaneId,
        to: LaneId,
    },
    Signal {
        road_id: RoadId,
        signal_id: SignalId,
        spec: SignalSpec,
    },
    SignalValidity {
        road_id: RoadId,
        signal_id: SignalId,
        from_lane: LaneId,
        to_lane: LaneId,
    },
}

impl MapBuilder {
    /// Spielt ein einzelnes Ereignis in den Builder ein.
    pub fn apply(&mut self, event: RoadEvent) {
        match event {
            RoadEvent::Road {
                id,
                name,
                length,
                junction_id,
                predecessor,
                successor,
            } => self.add_road(id, &name, length, junction_id, predecessor, successor),
            RoadEvent::RoadSection {
                road_id,
                lane_offset,
            } => self.add_road_section(road_id, lane_offset),
            RoadEvent::SectionLane {
                road_id,
                section_index,
                lane_id,
                lane_type,
                level,
                predecessor,
                successor,
            } => self.add_road_section_lane(
                road_id,
                section_index,
                lane_id,
                &lane_type,
                level,
                predecessor,
                successor,
            ),
            RoadEvent::LaneWidth {
                road_id,
                section_index,
                lane_id,
                s,
                a,
                b,
                c,
                d,
            } => self.add_lane_width(road_id, section_index, lane_id, s, a, b, c, d),
            RoadEvent::LaneBorder {
                road_id,
                section_index,
                lane_id,
                s,
                a,
                b,
                c,
                d,
            } => self.add_lane_border(road_id, section_index, lane_id, s, a, b, c, d),
            RoadEvent::LaneOffset {
                road_id,
                section_index,
                lane_id,
                s,
                a,
                b,
                c,
                d,
            } => self.add_lane_offset(road_id, section_index, lane_id, s, a, b, c, d),
            RoadEvent::LaneHeight {
                road_id,
                section_index,
                lane_id,
                s,
                inner,
                outer,
            } => self.add_lane_height(road_id, section_index, lane_id, s, inner, outer),
            RoadEvent::LaneMaterial {
                road_id,
                section_index,
                lane_id,
                s,
                surface,
                friction,
                roughness,
            } => self.add_lane_material(
                road_id,
                section_index,
                lane_id,
                s,
                &surface,
                friction,
                roughness,
            ),
            RoadEvent::LaneRule {
                road_id,
                section_index,
                lane_id,
                s,
                value,
            } => self.add_lane_rule(road_id, section_index, lane_id, s, &value),
            RoadEvent::LaneVisibility {
                road_id,
                section_index,
                lane_id,
                s,
                forward,
                back,
                left,
                right,
            } => self.add_lane_visibility(
                road_id,
                section_index,
                lane_id,
                s,
                forward,
                back,
                left,
                right,
            ),
            RoadEvent::LaneVelocity {
                road_id,
                section_index,
                lane_id,
                s,
                max,
                unit,
            } => self.add_lane_velocity(road_id, section_index, lane_id, s, max, &unit),
            RoadEvent::LaneAccess {
                road_id,
                section_index,
                lane_id,
                s,
                restriction,
            } => self.add_lane_access(road_id, section_index, lane_id, s, &restriction),
            RoadEvent::LaneMark {
                road_id,
                section_index,
                lane_id,
                mark_id,
                s,
                kind,
                weight,
                color,
                material,
                width,
                lane_change,
                height,
                type_name,
                type_width,
            } => self.add_lane_mark(
                road_id,
                section_index,
                lane_id,
                mark_id,
                s,
                &kind,
                &weight,
                &color,
                &material,
                width,
                &lane_change,
                height,
                &type_name,
                type_width,
            ),
            RoadEvent::LaneMarkTypeLine {
                road_id,
                section_index,
                lane_id,
                mark_id,
                length,
                space,
                t_offset,
                s,
                rule,
                width,
            } => self.add_lane_mark_type_line(
                road_id,
                section_index,
                lane_id,
                mark_id,
                length,
                space,
                t_offset,
                s,
                &rule,
                width,
            ),
            RoadEvent::ElevationProfile { road_id, s, a, b, c, d } => {
                self.add_road_elevation_profile(road_id, s, a, b, c, d)
            }
            RoadEvent::Junction { id, name } => self.add_junction(id, &name),
            RoadEvent::Connection {
                junction_id,
                connection_id,
                incoming_road,
                connecting_road,
            } => self.add_connection(junction_id, connection_id, incoming_road, connecting_road),
            RoadEvent::LaneLink {
                junction_id,
                connection_id,
                from,
                to,
            } => self.add_lane_link(junction_id, connection_id, from, to),
            RoadEvent::Signal {
                road_id,
                signal_id,
                spec,
            } => self.add_signal(road_id, signal_id, spec),
            RoadEvent::SignalValidity {
                road_id,
                signal_id,
                from_lane,
                to_lane,
            } => self.add_signal_validity(road_id, signal_id, from_lane, to_lane),
        }
    }

    /// Spielt einen kompletten Ereignis-Strom in Reihenfolge ein.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = RoadEvent>) {
        for event in events {
            self.apply(event);
        }
    }
}
