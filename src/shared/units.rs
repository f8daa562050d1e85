//! Einheiten-Umrechnung für die Anzeige.
//!
//! Distanzen und Höhen werden intern immer in Fuß gehalten, Zeiten in
//! Sekunden. Die Umrechnung in andere Einheiten passiert ausschließlich
//! zur Präsentationszeit.

use super::options::{FEET_PER_KILOMETER, FEET_PER_METER, FEET_PER_MILE, FEET_PER_YARD};

/// Fuß nach Yards, gerundet auf ganze Yards.
pub fn to_yards(feet: f64) -> i64 {
    (feet / FEET_PER_YARD).round() as i64
}

/// Fuß nach Meilen, auf 2 Nachkommastellen gerundet.
pub fn to_miles(feet: f64) -> f64 {
    round2(feet / FEET_PER_MILE)
}

/// Fuß nach Metern, gerundet auf ganze Meter.
pub fn to_meters(feet: f64) -> i64 {
    (feet / FEET_PER_METER).round() as i64
}

/// Fuß nach Kilometern, auf 2 Nachkommastellen gerundet.
pub fn to_kilometers(feet: f64) -> f64 {
    round2(feet / FEET_PER_KILOMETER)
}

/// Yards nach Fuß.
pub fn yards_to_feet(yards: f64) -> f64 {
    yards * FEET_PER_YARD
}

/// Meter nach Fuß.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Sekunden als Zeitpar-String im Format `m:ss` (Sekunden nullgepolstert).
///
/// Nachkommastellen werden abgeschnitten, nicht gerundet.
pub fn to_time_par(seconds: f64) -> String {
    let total = seconds as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_yards_rundet() {
        assert_eq!(to_yards(100.0), 33);
        assert_eq!(to_yards(101.0), 34);
    }

    #[test]
    fn test_to_miles_zwei_nachkommastellen() {
        assert_relative_eq!(to_miles(5280.0), 1.0);
        assert_relative_eq!(to_miles(7920.0), 1.5);
        assert_relative_eq!(to_miles(1234.0), 0.23);
    }

    #[test]
    fn test_meter_roundtrip_innerhalb_rundungstoleranz() {
        for feet in [1.0, 365.0, 5280.0, 12345.0] {
            let back = meters_to_feet(to_meters(feet) as f64);
            // Rundung auf ganze Meter: maximal ein halber Meter Abweichung
            assert!((back - feet).abs() <= FEET_PER_METER / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_to_time_par_format() {
        assert_eq!(to_time_par(0.0), "0:00");
        assert_eq!(to_time_par(59.9), "0:59");
        assert_eq!(to_time_par(60.0), "1:00");
        assert_eq!(to_time_par(754.0), "12:34");
    }
}
