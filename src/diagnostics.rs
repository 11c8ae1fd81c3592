//! Diagnose-Sammlung für die Soft-Fail-Politik des Builders.

/// Kategorie einer Diagnose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Ereignis adressiert eine unbekannte Straße
    UnknownRoad,
    /// Ereignis adressiert einen Sektions-Index außerhalb des Bereichs
    UnknownSection,
    /// Ereignis adressiert eine unbekannte Spur
    UnknownLane,
    /// Ereignis adressiert eine unbekannte Kreuzung
    UnknownJunction,
    /// Ereignis adressiert eine unbekannte Verbindung
    UnknownConnection,
    /// Ereignis adressiert ein unbekanntes Signal
    UnknownSignal,
    /// Typ-Linie ohne zugehörige Markierung
    UnknownMarkRecord,
    /// Create-Ereignis für eine bereits existierende Entität
    DuplicateEntity,
    /// Pass 1: Straßen-Verweis zeigt auf eine nicht existierende Straße
    DanglingRoadLink,
    /// Pass 2: Nachbarspur nicht auffindbar, Verweis bleibt leer
    UnresolvedLaneLink,
}

/// Einzelne Diagnose: Kategorie plus formatierte Meldung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Sammelt Diagnosen über den gesamten Build-Lauf.
///
/// Jede Aufnahme loggt zusätzlich eine Warnung; kein Eintrag bricht den
/// Build ab. Nach `build()` wandert die Sammlung in die Map und bleibt
/// dort abfragbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Nimmt eine Diagnose auf und loggt sie als Warnung.
    pub(crate) fn record(&mut self, kind: DiagnosticKind, message: String) {
        log::warn!("{}", message);
        self.entries.push(Diagnostic { kind, message });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterator über alle Diagnosen in Aufnahme-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Anzahl der Diagnosen einer Kategorie
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }
}

/// Zusammenfassung eines Build-Laufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Anzahl verworfener Ereignisse (Ziel nicht gefunden oder Duplikat)
    pub dropped_events: u32,
    /// Anzahl aufgelöster Straßen-Enden (Pass 1)
    pub linked_road_ends: u32,
    /// Anzahl entfernter Verweise auf nicht existierende Straßen (Pass 1)
    pub dangling_road_links: u32,
    /// Anzahl gefundener Segment-Ketten (Pass 1)
    pub road_chains: u32,
    /// Anzahl aufgelöster Spur-Verweise (Pass 2)
    pub resolved_lane_links: u32,
    /// Anzahl nicht auflösbarer Spur-Verweise (Pass 2)
    pub unresolved_lane_links: u32,
}

impl BuildReport {
    /// Lief der Build ohne Lücken durch?
    pub fn is_clean(&self) -> bool {
        self.dropped_events == 0
            && self.dangling_road_links == 0
            && self.unresolved_lane_links == 0
    }
}
