//! Kommandozeilen-Replay: spielt einen aufgezeichneten Ereignis-Strom ein
//! und baut daraus den Straßengraphen.

use anyhow::{bail, Context, Result};
use opendrive_graph_builder::{MapBuilder, RoadEvent};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("Aufruf: OpenDRIVE-Graph-Builder <ereignisse.json>");
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Ereignis-Datei nicht lesbar: {}", path))?;
    let events: Vec<RoadEvent> =
        serde_json::from_str(&content).context("Fehler beim Parsen des Ereignis-Stroms")?;

    log::info!("{} Ereignisse geladen aus: {}", events.len(), path);

    let mut builder = MapBuilder::new();
    builder.apply_all(events);
    let map = builder.build();

    let report = map.report();
    log::info!(
        "Straßengraph gebaut: {} Straßen, {} Kreuzungen, {} Segment-Ketten",
        map.road_count(),
        map.junction_count(),
        report.road_chains
    );
    log::info!(
        "Spur-Verweise: {} aufgelöst, {} offen; Straßen-Enden: {} verknüpft, {} hängend",
        report.resolved_lane_links,
        report.unresolved_lane_links,
        report.linked_road_ends,
        report.dangling_road_links
    );
    if !report.is_clean() {
        log::warn!(
            "Build mit Lücken abgeschlossen: {} Ereignisse verworfen, {} Diagnosen",
            report.dropped_events,
            map.diagnostics().len()
        );
    }

    Ok(())
}
