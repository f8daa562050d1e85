//! Use-Case: Start-/End-Vertex eines frisch gezeichneten Pfads an
//! Nachbarpfade einrasten.
//!
//! Benachbarte Pfade müssen sich an den Lochgrenzen einen exakten Vertex
//! teilen, damit die Laufroute über den ganzen Platz lückenlos ist.
//! Eingerastet werden ausschließlich der erste und letzte Vertex der
//! Zeichnung; innere Vertices bleiben wörtlich erhalten.

use crate::core::{GeoPoint, Hole, PathKind};

/// Vertex, auf den der Startpunkt der Zeichnung einrasten muss.
///
/// Golfpfad Loch 1: Ende des Startpfads, falls deklariert und
/// gezeichnet. Golfpfad ab Loch 2: Ende des Übergangspfads desselben
/// Lochs. Übergangspfad von Loch h: Ende des Golfpfads von Loch h-1.
/// `None` bedeutet freier Start.
pub fn snap_start_vertex(holes: &[Hole], hole_num: u32, kind: PathKind) -> Option<GeoPoint> {
    let idx = hole_num.checked_sub(1)? as usize;
    let hole = holes.get(idx)?;

    match kind {
        PathKind::Golf => {
            if hole_num == 1 {
                return hole.start_slot().and_then(|slot| slot.raw.last_vertex());
            }
            hole.transition.raw.last_vertex()
        }
        PathKind::Transition => {
            if hole_num < 2 {
                return None;
            }
            holes.get(idx - 1)?.golf.raw.last_vertex()
        }
        // Start- und Zielpfade haben keinen Vorgänger
        PathKind::Start | PathKind::Finish => None,
    }
}

/// Vertex, auf den der Endpunkt der Zeichnung einrasten muss.
///
/// Golfpfad des letzten Lochs: Anfang des Zielpfads, falls deklariert
/// und gezeichnet. Golfpfad sonst: Anfang des Übergangspfads des
/// nächsten Lochs. Übergangspfad von Loch h: Anfang des Golfpfads von
/// Loch h. `None` bedeutet freies Ende.
pub fn snap_end_vertex(holes: &[Hole], hole_num: u32, kind: PathKind) -> Option<GeoPoint> {
    let idx = hole_num.checked_sub(1)? as usize;
    let hole = holes.get(idx)?;
    let last_hole = hole_num as usize == holes.len();

    match kind {
        PathKind::Golf => {
            if last_hole {
                return hole.finish_slot().and_then(|slot| slot.raw.first_vertex());
            }
            holes.get(idx + 1)?.transition.raw.first_vertex()
        }
        PathKind::Transition => hole.golf.raw.first_vertex(),
        // Start- und Zielpfade haben keinen Nachfolger
        PathKind::Start | PathKind::Finish => None,
    }
}

/// Überschreibt ersten und letzten Vertex der Zeichnung mit den
/// Rast-Vertices, soweit vorhanden.
pub fn apply_snap(points: &mut [GeoPoint], start: Option<GeoPoint>, end: Option<GeoPoint>) {
    if let (Some(vertex), Some(first)) = (start, points.first_mut()) {
        *first = vertex;
    }
    if let (Some(vertex), Some(last)) = (end, points.last_mut()) {
        *last = vertex;
    }
}
