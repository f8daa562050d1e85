//! Application-Layer: Bearbeitungs-Use-Cases auf Platz-Snapshots.
//!
//! Alle Berechnungen sind synchron und einsträngig; eine Bearbeitung
//! liefert einen neuen Snapshot, bevor die Kontrolle zum Aufrufer
//! zurückkehrt. Kein Hintergrund-Rechnen, kein Retry, kein Abbruch.

pub mod use_cases;

pub use use_cases::{apply_path, apply_polygon, apply_scorecard};
