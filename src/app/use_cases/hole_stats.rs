//! Use-Case: Laufdistanzen und Zeitpars eines Lochs berechnen.
//!
//! Arbeitet auf den abgetasteten Pfadfassungen: jedes 50-Fuß-Segment
//! trägt Distanz plus höhen-adjustiertes Zeitpar bei, das
//! Shot-Box-Budget kommt einmal pro Loch dazu.

use crate::core::{path_distance_feet, percent_gradient, GeoPoint, Path};
use crate::shared::pace::segment_time_par;
use crate::shared::EngineOptions;

/// Laufstatistik eines Lochs, alle Distanzen in Fuß, Zeiten in Sekunden.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoleRunningStats {
    /// Laufdistanz des führenden Beins (Übergangs- bzw. Startpfad)
    pub trans_run_distance: f64,
    /// Zeitpar Damen des führenden Beins
    pub trans_womens_time_par: f64,
    /// Zeitpar Herren des führenden Beins
    pub trans_mens_time_par: f64,
    /// Laufdistanz des Golfpfads
    pub golf_run_distance: f64,
    /// Zeitpar Damen des Golfpfads
    pub golf_womens_time_par: f64,
    /// Zeitpar Herren des Golfpfads
    pub golf_mens_time_par: f64,
    /// Laufdistanz des Zielpfads (0 wenn nicht deklariert)
    pub finish_run_distance: f64,
    /// Zeitpar Damen des Zielpfads
    pub finish_womens_time_par: f64,
    /// Zeitpar Herren des Zielpfads
    pub finish_mens_time_par: f64,
    /// Gesamt-Laufdistanz des Lochs
    pub run_distance: f64,
    /// Gesamt-Zeitpar Damen inklusive Shot-Box
    pub womens_time_par: f64,
    /// Gesamt-Zeitpar Herren inklusive Shot-Box
    pub mens_time_par: f64,
}

/// Berechnet die Laufstatistik eines Lochs aus den abgetasteten Pfaden.
///
/// `leading`: führendes Bein des Lochs. `None` heißt "für dieses Loch
/// existiert kein führendes Bein" (Loch 1 ohne deklarierten Startpfad)
/// und trägt 0 bei. `finish` analog für das letzte Loch.
///
/// Ist eines der vorhandenen Beine `Path::Undefined`, kollabiert das
/// gesamte Ergebnis zu `None`: eine Laufdistanz mit unbekanntem
/// Teilstück wäre bedeutungslos, ein Teilergebnis wird nicht gemeldet.
///
/// Nicht gesetzte Schlagpars gibt der Aufrufer als NaN herein; das
/// Zeitpar wird dann sichtbar NaN statt still ein Bein zu unterschlagen.
pub fn hole_running_stats(
    opts: &EngineOptions,
    leading: Option<&Path>,
    golf: &Path,
    womens_stroke_par: f64,
    mens_stroke_par: f64,
    finish: Option<&Path>,
) -> Option<HoleRunningStats> {
    // Fehlendes-Bein-Dominanz: jedes vorhandene aber ungezeichnete Bein
    // macht das Gesamtergebnis undefiniert.
    if leading.is_some_and(|path| !path.is_defined()) {
        return None;
    }
    if finish.is_some_and(|path| !path.is_defined()) {
        return None;
    }
    let golf_points = golf.points()?;

    let mut stats = HoleRunningStats::default();

    if let Some(points) = leading.and_then(Path::points) {
        (
            stats.trans_run_distance,
            stats.trans_womens_time_par,
            stats.trans_mens_time_par,
        ) = leg_totals(opts, points);
    }
    (
        stats.golf_run_distance,
        stats.golf_womens_time_par,
        stats.golf_mens_time_par,
    ) = leg_totals(opts, golf_points);
    if let Some(points) = finish.and_then(Path::points) {
        (
            stats.finish_run_distance,
            stats.finish_womens_time_par,
            stats.finish_mens_time_par,
        ) = leg_totals(opts, points);
    }

    stats.run_distance =
        stats.trans_run_distance + stats.golf_run_distance + stats.finish_run_distance;
    stats.womens_time_par = stats.trans_womens_time_par
        + stats.golf_womens_time_par
        + stats.finish_womens_time_par
        + womens_stroke_par * opts.shot_box_sec_women;
    stats.mens_time_par = stats.trans_mens_time_par
        + stats.golf_mens_time_par
        + stats.finish_mens_time_par
        + mens_stroke_par * opts.shot_box_sec_men;

    Some(stats)
}

/// Summiert Distanz und beide Zeitpars über die Segmente eines Beins.
fn leg_totals(opts: &EngineOptions, points: &[GeoPoint]) -> (f64, f64, f64) {
    let mut distance = 0.0;
    let mut womens = 0.0;
    let mut mens = 0.0;

    for pair in points.windows(2) {
        let seg_dist = path_distance_feet(pair);
        let seg_gradient = percent_gradient(&pair[0], &pair[1], seg_dist);
        distance += seg_dist;
        womens += segment_time_par(seg_dist, seg_gradient, opts.par_run_pace_sec_per_mile_women);
        mens += segment_time_par(seg_dist, seg_gradient, opts.par_run_pace_sec_per_mile_men);
    }

    (distance, womens, mens)
}
