//! Höhen-adjustiertes Lauftempo-Modell.
//!
//! Rechnet Distanz und Steigung eines Pfadsegments in einen
//! Zeitpar-Beitrag um. Das Shot-Box-Budget pro Schlag wird nicht hier,
//! sondern einmal pro Loch addiert (siehe `app::use_cases::hole_stats`).

use super::options::{DOWNHILL_ADJUST_SEC_PER_MILE, FEET_PER_MILE, UPHILL_ADJUST_SEC_PER_MILE};

/// Zeitpar eines Pfadsegments in Sekunden.
///
/// Grundzeit: `distance/Meile x par_pace`. Adjustierung: +15 s/Meile pro
/// +1 % Steigung, -8 s/Meile pro 1 % Gefälle. Bei Steigung 0 exakt die
/// Grundzeit, ohne Adjustierung.
pub fn segment_time_par(
    distance_feet: f64,
    percent_gradient: f64,
    par_pace_sec_per_mile: f64,
) -> f64 {
    let miles = distance_feet / FEET_PER_MILE;
    let mut time_par = miles * par_pace_sec_per_mile;
    if percent_gradient > 0.0 {
        time_par += miles * percent_gradient * UPHILL_ADJUST_SEC_PER_MILE;
    } else if percent_gradient < 0.0 {
        time_par -= miles * percent_gradient.abs() * DOWNHILL_ADJUST_SEC_PER_MILE;
    }
    time_par
}
