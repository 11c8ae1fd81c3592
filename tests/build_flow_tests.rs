//! Integrationstests für den kompletten Ablauf:
//! Ingestion über die öffentliche API, Finalisierung, Abfragen auf der Map.

use approx::assert_relative_eq;
use opendrive_graph_builder::{
    CubicPolynomial, LaneLink, MapBuilder, RoadLink, SectionLocator, SignalSpec, NO_JUNCTION,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn offset_at(s: f64) -> CubicPolynomial {
    CubicPolynomial::new(s, 0.0, 0.0, 0.0, 0.0)
}

/// Kleines Netz: zwei verkettete Landstraßen-Segmente, eine Kreuzung mit
/// Verbindungs-Straße und ein Signal mit Gültigkeitsbereich.
fn build_small_network() -> opendrive_graph_builder::Map {
    let mut builder = MapBuilder::new();

    builder.add_road(1, "Landstraße Nord", 120.0, NO_JUNCTION, -1, 2);
    builder.add_road(2, "Landstraße Süd", 80.0, NO_JUNCTION, 1, -1);
    builder.add_road(6, "Verbinder", 25.0, 10, -1, -1);
    builder.add_road_section(1, offset_at(0.0));
    builder.add_road_section(2, offset_at(0.0));
    builder.add_road_section(6, offset_at(0.0));

    builder.add_road_section_lane(1, 0, -1, "driving", false, 0, -1);
    builder.add_road_section_lane(1, 0, 1, "sidewalk", true, 0, 0);
    builder.add_road_section_lane(2, 0, -1, "driving", false, -1, 0);
    builder.add_road_section_lane(6, 0, -1, "driving", false, 0, 0);

    builder.add_lane_width(1, 0, -1, 0.0, 3.25, 0.0, 0.0, 0.0);
    builder.add_road_elevation_profile(1, 0.0, 4.0, 0.002, 0.0, 0.0);

    builder.add_junction(10, "Dorfmitte");
    builder.add_connection(10, 1, 1, 6);
    builder.add_lane_link(10, 1, -1, -1);

    builder.add_signal(
        2,
        7,
        SignalSpec {
            s: 40.0,
            t: -2.0,
            name: "Ampel".to_string(),
            dynamic: "yes".to_string(),
            kind: "1000001".to_string(),
            ..Default::default()
        },
    );
    builder.add_signal_validity(2, 7, -1, -1);

    builder.build()
}

#[test]
fn test_kompletter_build_ablauf() {
    init_logger();
    let map = build_small_network();

    assert_eq!(map.road_count(), 3);
    assert_eq!(map.junction_count(), 1);
    assert!(map.diagnostics().is_empty());
    assert!(map.report().is_clean());

    // Segment-Kette 1 → 2
    let north = map.road(1).expect("Straße 1 erwartet");
    let south = map.road(2).expect("Straße 2 erwartet");
    assert_eq!(north.successor, RoadLink::Resolved(2));
    assert_relative_eq!(north.chain_length(), 200.0);
    assert_relative_eq!(south.chain_length(), 200.0);
    assert_relative_eq!(south.chain_offset(), 120.0);

    // Kreuzungs-Straße bildet ihre eigene Kette
    let connector = map.road(6).expect("Straße 6 erwartet");
    assert!(connector.is_junction());
    assert_relative_eq!(connector.chain_length(), 25.0);

    // Spur-Verweis über die Segment-Grenze
    let address = map
        .lane_address(1, SectionLocator::Start, -1)
        .expect("Adresse erwartet");
    let lane = map.lane(&address).expect("Spur erwartet");
    let target = lane.successor.resolved().expect("Nachfolger erwartet");
    assert_eq!(target.road, 2);
    assert_eq!(map.lane(&target).map(|l| l.id), Some(-1));

    // Gehweg-Spur ohne Verweise bleibt unverknüpft
    let sidewalk = map
        .lane_address(1, SectionLocator::Start, 1)
        .and_then(|a| map.lane(&a).cloned())
        .expect("Gehweg erwartet");
    assert_eq!(sidewalk.predecessor, LaneLink::None);
    assert_eq!(sidewalk.successor, LaneLink::None);

    // Kreuzung und Signal
    let junction = map.junction(10).expect("Kreuzung erwartet");
    let connection = junction.connection(1).expect("Verbindung erwartet");
    assert_eq!(connection.lane_links, vec![(-1, -1)]);
    let signal = map
        .road(2)
        .and_then(|r| r.signal(7))
        .expect("Signal erwartet");
    assert_eq!(signal.spec.dynamic, "yes");
    assert_eq!(signal.validities.len(), 1);
}

#[test]
fn test_map_lookup_idempotent() {
    init_logger();
    let map = build_small_network();

    let first = map.lane_address(2, SectionLocator::End, -1);
    let second = map.lane_address(2, SectionLocator::End, -1);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_luecken_brechen_den_build_nicht_ab() {
    init_logger();
    let mut builder = MapBuilder::new();
    builder.add_road(1, "R1", 50.0, NO_JUNCTION, -1, 99);
    builder.add_road_section(1, offset_at(0.0));
    // Spur-Ereignisse gegen unbekannte Ziele
    builder.add_road_section_lane(42, 0, -1, "driving", false, 0, 0);
    builder.add_lane_width(1, 5, -1, 0.0, 3.0, 0.0, 0.0, 0.0);
    builder.add_signal_validity(1, 77, -1, -1);

    let map = builder.build();
    assert_eq!(map.road_count(), 1);
    assert_eq!(map.report().dropped_events, 3);
    assert_eq!(map.report().dangling_road_links, 1);
    assert!(!map.report().is_clean());
    assert!(map.diagnostics().len() >= 4);
}
