//! Reine Geo-Mathematik für Pfad-Berechnungen.
//!
//! Layer-neutral: kann von `core`, `app` und Tests importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Alle Funktionen arbeiten auf
//! `glam::DVec2` (x = Längengrad, y = Breitengrad) bzw. nackten `f64`-Werten.

use glam::DVec2;

use super::options::EARTH_RADIUS_FEET;

/// Haversine-Distanz zweier Geokoordinaten in Fuß.
///
/// `p1`, `p2`: x = Längengrad, y = Breitengrad (Grad).
/// NaN-Koordinaten propagieren als NaN-Ergebnis (numerischer Kontrakt,
/// wird bewusst nicht abgefangen).
pub fn haversine_feet(p1: DVec2, p2: DVec2) -> f64 {
    let phi1 = p1.y.to_radians();
    let phi2 = p2.y.to_radians();
    let delta_phi = (p2.y - p1.y).to_radians();
    let delta_lambda = (p2.x - p1.x).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_FEET * c
}

/// Prozent-Steigung zwischen zwei Höhen über eine Distanz.
///
/// Nominal im Bereich [-100, 100]. Distanz 0 liefert Infinity/NaN und gilt
/// als Datenqualitätsproblem des Aufrufers, nicht als Fehlerfall.
pub fn gradient_percent(elv_start_feet: f64, elv_end_feet: f64, distance_feet: f64) -> f64 {
    (elv_end_feet - elv_start_feet) / distance_feet * 100.0
}

/// Punkt auf der Strecke `start`-`end` in Distanz `d2` vom Start.
///
/// Planare Interpolation im rohen Koordinatenraum: `d2` muss in denselben
/// Einheiten vorliegen wie die Koordinaten (Grad). Bei `start == end` ist
/// das Ergebnis NaN (Division durch Streckenlänge 0).
pub fn destination_point(start: DVec2, end: DVec2, d2: f64) -> DVec2 {
    let d = start.distance(end);
    start.lerp(end, d2 / d)
}

/// Planare Länge einer Polyline im rohen Koordinatenraum.
pub fn planar_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_identischer_punkte_ist_null() {
        let p = DVec2::new(-122.67, 45.52);
        assert_eq!(haversine_feet(p, p), 0.0);
    }

    #[test]
    fn test_haversine_bekannter_abstand() {
        // 0.001 Grad Breitengrad entsprechen ca. 111,2 m = ca. 364,8 Fuß
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(0.0, 0.001);
        assert_relative_eq!(haversine_feet(a, b), 364.8, max_relative = 0.01);
    }

    #[test]
    fn test_gradient_percent_vorzeichen() {
        assert_relative_eq!(gradient_percent(100.0, 110.0, 1000.0), 1.0);
        assert_relative_eq!(gradient_percent(110.0, 100.0, 1000.0), -1.0);
    }

    #[test]
    fn test_destination_point_liegt_auf_der_strecke() {
        let start = DVec2::new(0.0, 0.0);
        let end = DVec2::new(0.0, 1.0);
        let mid = destination_point(start, end, 0.5);
        assert_relative_eq!(mid.y, 0.5);
        assert_relative_eq!(mid.x, 0.0);
    }

    #[test]
    fn test_planar_length_summiert_segmente() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 4.0),
            DVec2::new(3.0, 8.0),
        ];
        assert_relative_eq!(planar_length(&pts), 9.0);
    }
}
