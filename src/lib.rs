//! SpeedScore Course Engine.
//! Geometrie- und Zeitpar-Berechnung für Speedgolf-Plätze: Distanzen,
//! höhen-adjustierte Zeitpars, Pfad-Abtastung, Einrasten an Lochgrenzen
//! sowie Vollständigkeits-Zähler und Einfügepunkte.

pub mod app;
pub mod core;
pub mod shared;

pub use app::use_cases::{
    apply_path, apply_polygon, apply_scorecard, hole_running_stats, resample, HoleRunningStats,
};
pub use core::{
    path_distance_feet, percent_gradient, Course, GeoPoint, Hole, HoleRole, Path, PathKind,
    PathSlot, PolyKind, TeeSet,
};
pub use core::{ElevationGrid, ElevationSource, PathInsertionPoint, PolyInsertionPoint, WorldBounds};
pub use shared::{segment_time_par, EngineOptions};
