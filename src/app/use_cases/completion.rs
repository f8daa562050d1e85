//! Use-Case: Vollständigkeits-Zähler und Einfügepunkte neu berechnen.
//!
//! Immer als voller Durchlauf über alle Löcher, nie inkrementell:
//! ein Zähler, der bei jeder Bearbeitung komplett neu entsteht, kann
//! nicht von der Wahrheit wegdriften.

use crate::core::{
    Hole, HoleRole, PathInsertionPoint, PathKind, PolyInsertionPoint, PolyKind, TeeSet,
};

/// Anzahl Löcher mit vollständigen Scorecard-Daten
/// (Golfdistanz und beide Schlagpars gesetzt).
pub fn num_holes_golf_data_complete(holes: &[Hole]) -> usize {
    holes.iter().filter(|h| h.golf_data_complete()).count()
}

/// Anzahl Löcher, deren anwendbare Pfade alle gezeichnet sind.
pub fn num_holes_path_data_complete(holes: &[Hole]) -> usize {
    holes.iter().filter(|h| h.path_data_complete()).count()
}

/// Anzahl Löcher mit gezeichneter Teebox und gezeichnetem Grün.
pub fn num_holes_poly_data_complete(holes: &[Hole]) -> usize {
    holes.iter().filter(|h| h.poly_data_complete()).count()
}

/// Erster noch nicht gezeichneter Pfad in Loch-Reihenfolge.
///
/// Innerhalb eines Lochs gilt die feste Prüf-Reihenfolge Startpfad
/// (nur Loch 1, falls deklariert), Übergangspfad (ab Loch 2), Golfpfad,
/// Zielpfad (nur letztes Loch, falls deklariert). Ist alles gezeichnet,
/// ist `kind` leer und `hole_num` die Lochanzahl.
pub fn path_insertion_point(holes: &[Hole]) -> PathInsertionPoint {
    for hole in holes {
        if let Some(slot) = hole.start_slot() {
            if !slot.is_defined() {
                return PathInsertionPoint {
                    kind: Some(PathKind::Start),
                    hole_num: hole.number,
                };
            }
        }
        let has_transition = !matches!(hole.role, HoleRole::First { .. });
        if has_transition && !hole.transition.is_defined() {
            return PathInsertionPoint {
                kind: Some(PathKind::Transition),
                hole_num: hole.number,
            };
        }
        if !hole.golf.is_defined() {
            return PathInsertionPoint {
                kind: Some(PathKind::Golf),
                hole_num: hole.number,
            };
        }
        if let Some(slot) = hole.finish_slot() {
            if !slot.is_defined() {
                return PathInsertionPoint {
                    kind: Some(PathKind::Finish),
                    hole_num: hole.number,
                };
            }
        }
    }
    PathInsertionPoint {
        kind: None,
        hole_num: holes.len() as u32,
    }
}

/// Erstes noch nicht gezeichnetes Polygon in Loch-Reihenfolge
/// (pro Loch erst Teebox, dann Grün).
pub fn poly_insertion_point(holes: &[Hole]) -> PolyInsertionPoint {
    for hole in holes {
        if !hole.teebox.is_defined() {
            return PolyInsertionPoint {
                kind: Some(PolyKind::Teebox),
                hole_num: hole.number,
            };
        }
        if !hole.green.is_defined() {
            return PolyInsertionPoint {
                kind: Some(PolyKind::Green),
                hole_num: hole.number,
            };
        }
    }
    PolyInsertionPoint {
        kind: None,
        hole_num: holes.len() as u32,
    }
}

/// Berechnet alle Zähler und beide Einfügepunkte eines Tee-Sets neu.
pub fn recompute(tee: &mut TeeSet) {
    tee.num_holes_golf_data_complete = num_holes_golf_data_complete(&tee.holes);
    tee.num_holes_path_data_complete = num_holes_path_data_complete(&tee.holes);
    tee.num_holes_poly_data_complete = num_holes_poly_data_complete(&tee.holes);
    tee.path_insertion_point = path_insertion_point(&tee.holes);
    tee.poly_insertion_point = poly_insertion_point(&tee.holes);
}
