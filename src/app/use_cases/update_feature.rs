//! Use-Case: eine Bearbeitung atomar auf ein Tee-Set anwenden.
//!
//! Jede Bearbeitung (Pfad gezeichnet, Polygon gezeichnet, Scorecard-Wert
//! geändert) löst genau einen vollständigen Durchlauf aus: Einrasten,
//! Abtasten, Lochstatistik, Zähler, Einfügepunkte. Das Tee-Set wird als
//! unveränderlicher Snapshot behandelt; das Ergebnis ist immer ein neues
//! Tee-Set, der Aufrufer ersetzt damit von unten nach oben
//! (Loch, Tee-Set, Platz).

use crate::core::{
    ElevationSource, GeoPoint, Hole, HoleRole, Path, PathKind, PathSlot, PolyKind, TeeSet,
};
use crate::shared::EngineOptions;

use super::{completion, hole_stats, sampling, snapping};

/// Wendet einen frisch gezeichneten Pfad auf ein Tee-Set an.
///
/// Rastet Start- und End-Vertex an Nachbarpfade ein, tastet den Pfad im
/// konfigurierten Abstand neu ab und berechnet Lochstatistik, Zähler und
/// Einfügepunkte neu. Außervertragliche Eingaben (unbekannte Lochnummer,
/// nicht deklarierter Rand-Pfad, weniger als 2 Punkte) lassen das Tee-Set
/// unverändert.
pub fn apply_path(
    tee: &TeeSet,
    hole_num: u32,
    kind: PathKind,
    drawn: Vec<GeoPoint>,
    elevation: &dyn ElevationSource,
    opts: &EngineOptions,
) -> TeeSet {
    let mut next = tee.clone();

    let Some(idx) = hole_index(tee, hole_num) else {
        return next;
    };
    if drawn.len() < 2 {
        log::warn!(
            "Pfad-Edit: Loch {} braucht mindestens 2 Punkte ({} erhalten)",
            hole_num,
            drawn.len()
        );
        return next;
    }

    // Einrasten vor dem Abtasten: nur erster/letzter Vertex
    let mut points = drawn;
    let snap_start = snapping::snap_start_vertex(&tee.holes, hole_num, kind);
    let snap_end = snapping::snap_end_vertex(&tee.holes, hole_num, kind);
    snapping::apply_snap(&mut points, snap_start, snap_end);

    let sampled = sampling::resample(&points, opts.sampling_dist_feet, elevation);
    let slot = PathSlot {
        raw: Path::from_points(points),
        sampled: Path::from_points(sampled),
    };

    let hole = &mut next.holes[idx];
    match kind {
        PathKind::Transition => hole.transition = slot,
        PathKind::Golf => hole.golf = slot,
        PathKind::Start => match &mut hole.role {
            HoleRole::First { start: Some(start) } => *start = slot,
            _ => {
                log::warn!("Pfad-Edit: Loch {} hat keinen Startpfad-Slot", hole_num);
                return tee.clone();
            }
        },
        PathKind::Finish => match &mut hole.role {
            HoleRole::Last {
                finish: Some(finish),
            } => *finish = slot,
            _ => {
                log::warn!("Pfad-Edit: Loch {} hat keinen Zielpfad-Slot", hole_num);
                return tee.clone();
            }
        },
    }

    refresh_hole_stats(hole, opts);
    completion::recompute(&mut next);
    log::info!(
        "Loch {}: Pfad aktualisiert, Laufdistanz {:?} Fuß",
        hole_num,
        next.holes[idx].run_distance
    );
    next
}

/// Wendet ein frisch gezeichnetes Polygon (Teebox oder Grün) an.
pub fn apply_polygon(tee: &TeeSet, hole_num: u32, kind: PolyKind, points: Vec<GeoPoint>) -> TeeSet {
    let mut next = tee.clone();

    let Some(idx) = hole_index(tee, hole_num) else {
        return next;
    };

    let poly = Path::from_points(points);
    match kind {
        PolyKind::Teebox => next.holes[idx].teebox = poly,
        PolyKind::Green => next.holes[idx].green = poly,
    }

    completion::recompute(&mut next);
    next
}

/// Wendet eine Scorecard-Bearbeitung an (Golfdistanz, Schlagpars).
///
/// Auch eine Schlagpar-Änderung ist eine Bearbeitung wie jede andere:
/// die Zeitpars des Lochs werden aus den vorhandenen abgetasteten Pfaden
/// und den neuen Pars neu berechnet.
pub fn apply_scorecard(
    tee: &TeeSet,
    hole_num: u32,
    golf_distance: Option<f64>,
    womens_stroke_par: Option<u32>,
    mens_stroke_par: Option<u32>,
    opts: &EngineOptions,
) -> TeeSet {
    let mut next = tee.clone();

    let Some(idx) = hole_index(tee, hole_num) else {
        return next;
    };

    let hole = &mut next.holes[idx];
    hole.golf_distance = golf_distance;
    hole.womens_stroke_par = womens_stroke_par;
    hole.mens_stroke_par = mens_stroke_par;

    refresh_hole_stats(hole, opts);
    completion::recompute(&mut next);
    next
}

/// Berechnet die abgeleiteten Werte eines Lochs aus seinen abgetasteten
/// Pfaden neu.
///
/// Das führende Bein ist bei Loch 1 der Startpfad (falls deklariert,
/// sonst gar kein führendes Bein), sonst der Übergangspfad. Der Zielpfad
/// zählt nur beim letzten Loch mit deklariertem Slot.
fn refresh_hole_stats(hole: &mut Hole, opts: &EngineOptions) {
    let leading: Option<&Path> = match &hole.role {
        HoleRole::First { start } => start.as_ref().map(|slot| &slot.sampled),
        _ => Some(&hole.transition.sampled),
    };
    let finish: Option<&Path> = match &hole.role {
        HoleRole::Last { finish } => finish.as_ref().map(|slot| &slot.sampled),
        _ => None,
    };
    let finish_declared = finish.is_some();

    // Nicht gesetzte Schlagpars propagieren als NaN durch die Zeitpars.
    let womens_par = hole.womens_stroke_par.map_or(f64::NAN, f64::from);
    let mens_par = hole.mens_stroke_par.map_or(f64::NAN, f64::from);

    let stats = hole_stats::hole_running_stats(
        opts,
        leading,
        &hole.golf.sampled,
        womens_par,
        mens_par,
        finish,
    );

    hole.run_distance = stats.map(|s| s.run_distance);
    hole.trans_run_distance = stats.map(|s| s.trans_run_distance);
    hole.golf_run_distance = stats.map(|s| s.golf_run_distance);
    hole.finish_run_distance = if finish_declared {
        stats.map(|s| s.finish_run_distance)
    } else {
        None
    };
    hole.womens_time_par = stats.map(|s| s.womens_time_par);
    hole.mens_time_par = stats.map(|s| s.mens_time_par);
}

/// Index eines Lochs per 1-basierter Nummer, mit Warnung bei Fehlgriff.
fn hole_index(tee: &TeeSet, hole_num: u32) -> Option<usize> {
    let idx = hole_num.checked_sub(1)? as usize;
    if idx >= tee.holes.len() {
        log::warn!(
            "Unbekannte Lochnummer {} auf Tee-Set \"{}\"",
            hole_num,
            tee.name
        );
        return None;
    }
    Some(idx)
}
