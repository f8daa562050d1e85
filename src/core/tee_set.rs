//! Das Tee-Set: Lochliste, Vollständigkeits-Zähler und Einfügepunkte.

use serde::{Deserialize, Serialize};

use super::hole::{Hole, HoleRole, PathKind, PolyKind};

/// Nächster zu zeichnender Pfad: Pfadart und Lochnummer.
///
/// `kind == None` bedeutet: alle Pfade des Tee-Sets sind gezeichnet;
/// `hole_num` trägt dann die Lochanzahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInsertionPoint {
    /// Als Nächstes zu zeichnende Pfadart, `None` wenn nichts übrig ist
    pub kind: Option<PathKind>,
    /// Lochnummer des Einfügepunkts (1-basiert)
    pub hole_num: u32,
}

/// Nächstes zu zeichnendes Polygon: Polygonart und Lochnummer.
///
/// Unabhängig vom Pfad-Einfügepunkt geführt, weil Pfad- und
/// Polygon-Eingabe getrennte Arbeitsabläufe sind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyInsertionPoint {
    /// Als Nächstes zu zeichnende Polygonart, `None` wenn nichts übrig ist
    pub kind: Option<PolyKind>,
    /// Lochnummer des Einfügepunkts (1-basiert)
    pub hole_num: u32,
}

/// Ein Tee-Set: benannte Lochfolge mit Bewertungen und abgeleitetem
/// Vollständigkeits-Zustand.
///
/// Die Zähler und Einfügepunkte werden bei jeder Bearbeitung vollständig
/// neu berechnet (`app::use_cases::completion`), nie inkrementell
/// fortgeschrieben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeeSet {
    /// Name des Tee-Sets (eindeutig pro Platz)
    pub name: String,
    /// Löcher in Spielreihenfolge
    pub holes: Vec<Hole>,

    // ── Bewertung ───────────────────────────────────────────────
    /// Course-Rating Damen
    pub womens_rating: Option<f64>,
    /// Course-Rating Herren
    pub mens_rating: Option<f64>,
    /// Slope Damen
    pub womens_slope: Option<u32>,
    /// Slope Herren
    pub mens_slope: Option<u32>,

    // ── Abgeleitet ──────────────────────────────────────────────
    /// Anzahl Löcher mit vollständigen Scorecard-Daten
    pub num_holes_golf_data_complete: usize,
    /// Anzahl Löcher mit vollständigen Pfaddaten
    pub num_holes_path_data_complete: usize,
    /// Anzahl Löcher mit vollständigen Polygondaten
    pub num_holes_poly_data_complete: usize,
    /// Nächster zu zeichnender Pfad
    pub path_insertion_point: PathInsertionPoint,
    /// Nächstes zu zeichnendes Polygon
    pub poly_insertion_point: PolyInsertionPoint,
}

impl TeeSet {
    /// Erstellt ein vollständig gerüstetes Tee-Set mit `num_holes`
    /// Löchern: alle Slots undefiniert, Zähler 0, Einfügepunkte auf dem
    /// ersten Loch.
    ///
    /// `with_start_path` / `with_finish_path` deklarieren die optionalen
    /// Randpfade des ersten bzw. letzten Lochs für dieses Tee-Set.
    pub fn new(name: &str, num_holes: u32, with_start_path: bool, with_finish_path: bool) -> Self {
        let holes = (1..=num_holes)
            .map(|number| {
                let role = Self::role_for(number, num_holes, with_start_path, with_finish_path);
                Hole::scaffold(number, role)
            })
            .collect();

        // Statische Saat; entspricht der vollen Neuberechnung auf einem
        // komplett leeren Tee-Set.
        let first_path = if with_start_path {
            PathKind::Start
        } else {
            PathKind::Golf
        };

        Self {
            name: name.to_owned(),
            holes,
            womens_rating: None,
            mens_rating: None,
            womens_slope: None,
            mens_slope: None,
            num_holes_golf_data_complete: 0,
            num_holes_path_data_complete: 0,
            num_holes_poly_data_complete: 0,
            path_insertion_point: PathInsertionPoint {
                kind: Some(first_path),
                hole_num: 1,
            },
            poly_insertion_point: PolyInsertionPoint {
                kind: Some(PolyKind::Teebox),
                hole_num: 1,
            },
        }
    }

    /// Rolle eines Lochs anhand seiner Nummer und der Lochanzahl.
    ///
    /// Bei einem Ein-Loch-Set gewinnt die Erste-Loch-Rolle.
    fn role_for(number: u32, num_holes: u32, with_start: bool, with_finish: bool) -> HoleRole {
        if number == 1 {
            HoleRole::First {
                start: with_start.then(Default::default),
            }
        } else if number == num_holes {
            HoleRole::Last {
                finish: with_finish.then(Default::default),
            }
        } else {
            HoleRole::Interior
        }
    }

    /// Loch per 1-basierter Nummer.
    pub fn hole(&self, hole_num: u32) -> Option<&Hole> {
        self.holes.get(hole_num.checked_sub(1)? as usize)
    }

    /// Anzahl der Löcher.
    pub fn num_holes(&self) -> u32 {
        self.holes.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geruest_rollen_und_einfuegepunkte() {
        let tee = TeeSet::new("Blau", 3, true, false);
        assert!(matches!(
            tee.holes[0].role,
            HoleRole::First { start: Some(_) }
        ));
        assert!(matches!(tee.holes[1].role, HoleRole::Interior));
        assert!(matches!(tee.holes[2].role, HoleRole::Last { finish: None }));
        assert_eq!(tee.path_insertion_point.kind, Some(PathKind::Start));
        assert_eq!(tee.path_insertion_point.hole_num, 1);
        assert_eq!(tee.poly_insertion_point.kind, Some(PolyKind::Teebox));
    }

    #[test]
    fn test_geruest_ohne_startpfad_beginnt_beim_golfpfad() {
        let tee = TeeSet::new("Weiß", 2, false, true);
        assert!(matches!(tee.holes[0].role, HoleRole::First { start: None }));
        assert!(matches!(
            tee.holes[1].role,
            HoleRole::Last { finish: Some(_) }
        ));
        assert_eq!(tee.path_insertion_point.kind, Some(PathKind::Golf));
    }
}
