//! Layer-neutrale Helfer: reine Mathematik, Einheiten, Konfiguration.
//!
//! Darf von `core` und `app` importiert werden, ohne selbst von
//! Domänentypen abzuhängen.

pub mod geo_math;
pub mod options;
pub mod pace;
pub mod units;

pub use options::EngineOptions;
pub use options::{DEGREES_PER_FOOT, FEET_PER_MILE, SAMPLING_DIST_FEET};
pub use pace::segment_time_par;
