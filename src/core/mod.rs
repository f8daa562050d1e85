//! Core-Domänentypen: Geo-Punkte, Pfade, Löcher, Tee-Sets, Platz, Terrain.

pub mod course;
pub mod geo;
pub mod hole;
pub mod tee_set;
pub mod terrain;

pub use course::Course;
pub use geo::{path_distance_feet, percent_gradient, GeoPoint, Path, PathSlot};
pub use hole::{Hole, HoleRole, PathKind, PolyKind};
pub use tee_set::{PathInsertionPoint, PolyInsertionPoint, TeeSet};
pub use terrain::{ElevationGrid, ElevationSource, WorldBounds};
