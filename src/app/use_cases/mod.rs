//! Use-Cases der Engine: atomare Bearbeitungs-Durchläufe auf Tee-Sets.

pub mod completion;
pub mod hole_stats;
pub mod sampling;
pub mod snapping;
pub mod update_feature;

pub use hole_stats::{hole_running_stats, HoleRunningStats};
pub use sampling::resample;
pub use update_feature::{apply_path, apply_polygon, apply_scorecard};
