//! Use-Case: Pfad in festem Abstand neu abtasten.
//!
//! Die abgetastete Fassung dient ausschließlich der Statistik: pro
//! 50-Fuß-Segment wird die Steigung einzeln bewertet, damit Hügel nicht
//! durch lange Segmente weggemittelt werden.

use glam::DVec2;

use crate::core::{ElevationSource, GeoPoint};
use crate::shared::geo_math::destination_point;
use crate::shared::options::DEGREES_PER_FOOT;

/// Tastet einen Pfad mit festem Punktabstand neu ab.
///
/// Pro Original-Segment der planaren Länge `d` entstehen
/// `floor(d/spacing) + 1` Punkte entlang der Sehne (planare Interpolation
/// im rohen Koordinatenraum, siehe `DEGREES_PER_FOOT`); für jeden Punkt
/// wird die Höhe frisch aus `elevation` abgefragt. Der letzte Punkt des
/// Originals wird immer unverändert angehängt: der Endpunkt der
/// abgetasteten Fassung ist exakt der Endpunkt des Originals, auch wenn
/// der Abstand nicht glatt aufgeht.
///
/// Kontrakt: Eingabe hat mindestens 2 Punkte, Ausgabe dann ebenfalls.
/// Null-Länge-Segmente und NaN-Koordinaten propagieren als NaN.
pub fn resample(
    points: &[GeoPoint],
    spacing_feet: f64,
    elevation: &dyn ElevationSource,
) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let spacing_deg = spacing_feet * DEGREES_PER_FOOT;
    let mut sampled = Vec::new();

    for pair in points.windows(2) {
        let start = pair[0].lng_lat();
        let end = pair[1].lng_lat();
        let planar_dist = start.distance(end);

        let steps = (planar_dist / spacing_deg).floor() as usize;
        for j in 0..=steps {
            let dest = destination_point(start, end, spacing_deg * j as f64);
            sampled.push(sample_point(dest, elevation));
        }
    }

    // Endpunkt immer exakt übernehmen
    sampled.push(points[points.len() - 1]);
    sampled
}

/// Baut einen Geo-Punkt mit frisch abgefragter Höhe.
fn sample_point(lng_lat: DVec2, elevation: &dyn ElevationSource) -> GeoPoint {
    GeoPoint {
        lat: lng_lat.y,
        lng: lng_lat.x,
        elv: elevation.elevation_feet_at(lng_lat),
    }
}
