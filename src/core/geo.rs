//! Geo-Primitive: Punkte, Pfade und Pfad-Slots.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shared::geo_math;

/// Ein Geo-Messpunkt: Breitengrad/Längengrad in Grad, Höhe in Fuß.
///
/// Die Höhe ist intern immer in Fuß, unabhängig von der Einheit der
/// Messquelle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
    /// Höhe in Fuß
    pub elv: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Geo-Punkt.
    pub fn new(lat: f64, lng: f64, elv: f64) -> Self {
        Self { lat, lng, elv }
    }

    /// 2D-Position als Vektor (x = Längengrad, y = Breitengrad).
    pub fn lng_lat(&self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

/// Ein Pfad: entweder noch nicht gezeichnet oder eine nicht-leere
/// Punktfolge.
///
/// `Undefined` unterscheidet "nie eingegeben" strukturell von einer
/// eingegebenen Punktfolge; eine leere Folge kommt als `Defined` nie vor
/// (`Path::from_points` normalisiert). Wird auch für Polygone (Teebox,
/// Grün) verwendet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Path {
    /// Noch nicht gezeichnet
    #[default]
    Undefined,
    /// Gezeichnete, nicht-leere Punktfolge
    Defined(Vec<GeoPoint>),
}

impl Path {
    /// Erstellt einen Pfad aus Punkten; eine leere Folge wird zu
    /// `Undefined` normalisiert.
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        if points.is_empty() {
            Path::Undefined
        } else {
            Path::Defined(points)
        }
    }

    /// Liegt eine gezeichnete Punktfolge vor?
    pub fn is_defined(&self) -> bool {
        matches!(self, Path::Defined(_))
    }

    /// Punkte des Pfads, falls gezeichnet.
    pub fn points(&self) -> Option<&[GeoPoint]> {
        match self {
            Path::Undefined => None,
            Path::Defined(points) => Some(points),
        }
    }

    /// Erster Vertex des Pfads, falls gezeichnet.
    pub fn first_vertex(&self) -> Option<GeoPoint> {
        self.points().and_then(|p| p.first().copied())
    }

    /// Letzter Vertex des Pfads, falls gezeichnet.
    pub fn last_vertex(&self) -> Option<GeoPoint> {
        self.points().and_then(|p| p.last().copied())
    }

    /// Haversine-Gesamtdistanz des Pfads in Fuß (`Undefined` ergibt 0).
    pub fn distance_feet(&self) -> f64 {
        self.points().map_or(0.0, path_distance_feet)
    }
}

/// Ein Pfad-Slot: der gezeichnete Pfad plus seine abgetastete Fassung.
///
/// Die abgetastete Fassung (fester 50-Fuß-Abstand) wird ausschließlich
/// für Statistik verwendet, nie für die Darstellung.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathSlot {
    /// Der gezeichnete Pfad
    pub raw: Path,
    /// Abgetastete Fassung mit frisch abgefragten Höhen
    pub sampled: Path,
}

impl PathSlot {
    /// Gezeichnet genau dann, wenn der rohe Pfad gezeichnet ist.
    pub fn is_defined(&self) -> bool {
        self.raw.is_defined()
    }
}

/// Haversine-Gesamtdistanz einer Punktfolge in Fuß.
///
/// Weniger als 2 Punkte ergeben 0. NaN-Koordinaten propagieren.
pub fn path_distance_feet(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| geo_math::haversine_feet(w[0].lng_lat(), w[1].lng_lat()))
        .sum()
}

/// Prozent-Steigung zwischen zwei Geo-Punkten über eine Distanz in Fuß.
pub fn percent_gradient(p1: &GeoPoint, p2: &GeoPoint, distance_feet: f64) -> f64 {
    geo_math::gradient_percent(p1.elv, p2.elv, distance_feet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leere_punktfolge_wird_undefined() {
        assert_eq!(Path::from_points(Vec::new()), Path::Undefined);
        assert!(Path::from_points(vec![GeoPoint::new(0.0, 0.0, 0.0)]).is_defined());
    }

    #[test]
    fn test_distanz_degenerierter_pfade_ist_null() {
        let p = GeoPoint::new(45.0, -122.0, 100.0);
        assert_eq!(path_distance_feet(&[]), 0.0);
        assert_eq!(path_distance_feet(&[p]), 0.0);
        assert_eq!(path_distance_feet(&[p, p]), 0.0);
    }
}
