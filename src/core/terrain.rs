//! Gelände-Höhenabfrage als injizierte Fähigkeit.
//!
//! Die Engine fragt Höhen nie selbst von einem Dienst ab; beim Abtasten
//! wird eine `ElevationSource` hereingereicht. Liefert die Quelle
//! Nicht-Zahlen (NaN), propagieren diese sichtbar durch die Statistik,
//! statt den Vorgang abzubrechen.

use anyhow::{ensure, Result};
use glam::DVec2;

/// Quelle für Geländehöhen in Fuß an einer 2D-Position
/// (x = Längengrad, y = Breitengrad).
pub trait ElevationSource {
    /// Höhe in Fuß an der Position.
    fn elevation_feet_at(&self, lng_lat: DVec2) -> f64;
}

impl<F> ElevationSource for F
where
    F: Fn(DVec2) -> f64,
{
    fn elevation_feet_at(&self, lng_lat: DVec2) -> f64 {
        self(lng_lat)
    }
}

/// Koordinaten-Begrenzungen eines Höhenrasters in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Minimaler Längengrad (links)
    pub min_lng: f64,
    /// Minimaler Breitengrad (unten)
    pub min_lat: f64,
    /// Maximaler Längengrad (rechts)
    pub max_lng: f64,
    /// Maximaler Breitengrad (oben)
    pub max_lat: f64,
}

/// In-Memory-Höhenraster mit bilinearer Abtastung.
///
/// Dient als lokaler Stellvertreter für die externe Terrain-Abfrage,
/// z. B. in Tests oder wenn der Aufrufer Höhendaten bereits als Raster
/// vorliegen hat. Werte sind Höhen in Fuß, zeilenweise gespeichert
/// (Zeile 0 = `min_lat`).
#[derive(Debug, Clone)]
pub struct ElevationGrid {
    values: Vec<f64>,
    width: usize,
    height: usize,
    bounds: WorldBounds,
}

impl ElevationGrid {
    /// Erstellt ein Raster aus Höhenwerten in Fuß.
    pub fn new(values: Vec<f64>, width: usize, height: usize, bounds: WorldBounds) -> Result<Self> {
        ensure!(
            width >= 2 && height >= 2,
            "Höhenraster braucht mindestens 2x2 Werte ({}x{})",
            width,
            height
        );
        ensure!(
            values.len() == width * height,
            "Höhenraster: {} Werte passen nicht zu {}x{}",
            values.len(),
            width,
            height
        );
        ensure!(
            bounds.max_lng > bounds.min_lng && bounds.max_lat > bounds.min_lat,
            "Höhenraster: leere World-Bounds"
        );
        Ok(Self {
            values,
            width,
            height,
            bounds,
        })
    }

    /// Bilinear interpolierte Höhe; Positionen außerhalb der Bounds
    /// werden auf den Rand geklemmt.
    fn sample(&self, lng_lat: DVec2) -> f64 {
        let b = &self.bounds;
        let fx = (lng_lat.x - b.min_lng) / (b.max_lng - b.min_lng) * (self.width - 1) as f64;
        let fy = (lng_lat.y - b.min_lat) / (b.max_lat - b.min_lat) * (self.height - 1) as f64;
        let fx = fx.clamp(0.0, (self.width - 1) as f64);
        let fy = fy.clamp(0.0, (self.height - 1) as f64);

        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let tx = fx - x0 as f64;
        let ty = fy - y0 as f64;

        let v00 = self.values[y0 * self.width + x0];
        let v10 = self.values[y0 * self.width + x1];
        let v01 = self.values[y1 * self.width + x0];
        let v11 = self.values[y1 * self.width + x1];

        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        top + (bottom - top) * ty
    }
}

impl ElevationSource for ElevationGrid {
    fn elevation_feet_at(&self, lng_lat: DVec2) -> f64 {
        self.sample(lng_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_2x2() -> ElevationGrid {
        let bounds = WorldBounds {
            min_lng: 0.0,
            min_lat: 0.0,
            max_lng: 1.0,
            max_lat: 1.0,
        };
        ElevationGrid::new(vec![0.0, 100.0, 0.0, 100.0], 2, 2, bounds).unwrap()
    }

    #[test]
    fn test_bilineare_abtastung_in_der_mitte() {
        let grid = grid_2x2();
        assert_relative_eq!(grid.elevation_feet_at(DVec2::new(0.5, 0.5)), 50.0);
    }

    #[test]
    fn test_abtastung_ausserhalb_klemmt_auf_rand() {
        let grid = grid_2x2();
        assert_relative_eq!(grid.elevation_feet_at(DVec2::new(-1.0, 0.0)), 0.0);
        assert_relative_eq!(grid.elevation_feet_at(DVec2::new(2.0, 0.0)), 100.0);
    }

    #[test]
    fn test_dimensions_pruefung() {
        let bounds = WorldBounds {
            min_lng: 0.0,
            min_lat: 0.0,
            max_lng: 1.0,
            max_lat: 1.0,
        };
        assert!(ElevationGrid::new(vec![0.0; 3], 2, 2, bounds).is_err());
    }
}
