//! Das Loch: Pfad-Slots, Polygone, Scorecard- und abgeleitete Werte.

use serde::{Deserialize, Serialize};

use super::geo::{Path, PathSlot};

/// Pfadarten eines Lochs, in fester Eingabe-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    /// Startpfad von der Startlinie zum ersten Abschlag (nur Loch 1)
    Start,
    /// Übergangspfad vom vorherigen Grün zum Abschlag (ab Loch 2)
    Transition,
    /// Golfpfad vom Abschlag zum Grün
    Golf,
    /// Zielpfad vom letzten Grün zur Ziellinie (nur letztes Loch)
    Finish,
}

/// Polygonarten eines Lochs, in fester Eingabe-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolyKind {
    /// Abschlagbox
    Teebox,
    /// Grün
    Green,
}

/// Rolle des Lochs im Tee-Set.
///
/// Start- und Zielpfad existieren nur als Slots der Randlöcher; ob sie
/// für ein Tee-Set überhaupt deklariert sind, steckt im `Option`
/// (`None` = nicht deklariert, `Some` mit `Path::Undefined` = deklariert
/// aber noch nicht gezeichnet). Damit entfällt das Testen von
/// Array-Indizes gegen 0 bzw. Länge-1 an den Aufrufstellen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HoleRole {
    /// Erstes Loch, optional mit Startpfad
    First {
        /// Startpfad-Slot, falls für das Tee-Set deklariert
        start: Option<PathSlot>,
    },
    /// Inneres Loch
    Interior,
    /// Letztes Loch, optional mit Zielpfad
    Last {
        /// Zielpfad-Slot, falls für das Tee-Set deklariert
        finish: Option<PathSlot>,
    },
}

/// Ein Loch eines Tee-Sets.
///
/// Abgeleitete Werte (`run_distance`, Zeitpars usw.) werden nie von Hand
/// gesetzt; sie sind eine reine Funktion der Pfadgeometrie und Schlagpars
/// zum Zeitpunkt der letzten Bearbeitung. `None` ist der
/// "nicht berechenbar"-Sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Lochnummer (1-basiert)
    pub number: u32,
    /// Rolle im Tee-Set (erstes/inneres/letztes Loch)
    pub role: HoleRole,
    /// Übergangspfad vom vorherigen Grün (bei Loch 1 ungenutzt)
    pub transition: PathSlot,
    /// Golfpfad vom Abschlag zum Grün
    pub golf: PathSlot,
    /// Abschlagbox-Polygon
    pub teebox: Path,
    /// Grün-Polygon
    pub green: Path,

    // ── Scorecard ───────────────────────────────────────────────
    /// Golfdistanz in Fuß
    pub golf_distance: Option<f64>,
    /// Schlagpar Damen
    pub womens_stroke_par: Option<u32>,
    /// Schlagpar Herren
    pub mens_stroke_par: Option<u32>,
    /// Handicap Damen
    pub womens_handicap: Option<u32>,
    /// Handicap Herren
    pub mens_handicap: Option<u32>,

    // ── Abgeleitet (Fuß / Sekunden) ─────────────────────────────
    /// Gesamt-Laufdistanz des Lochs
    pub run_distance: Option<f64>,
    /// Laufdistanz des Übergangspfads
    pub trans_run_distance: Option<f64>,
    /// Laufdistanz des Golfpfads
    pub golf_run_distance: Option<f64>,
    /// Laufdistanz des Zielpfads (nur letztes Loch mit Zielpfad)
    pub finish_run_distance: Option<f64>,
    /// Zeitpar Damen
    pub womens_time_par: Option<f64>,
    /// Zeitpar Herren
    pub mens_time_par: Option<f64>,
}

impl Hole {
    /// Erstellt ein vollständig gerüstetes Loch: alle Slots undefiniert,
    /// alle Scorecard- und abgeleiteten Werte leer.
    pub fn scaffold(number: u32, role: HoleRole) -> Self {
        Self {
            number,
            role,
            transition: PathSlot::default(),
            golf: PathSlot::default(),
            teebox: Path::Undefined,
            green: Path::Undefined,
            golf_distance: None,
            womens_stroke_par: None,
            mens_stroke_par: None,
            womens_handicap: None,
            mens_handicap: None,
            run_distance: None,
            trans_run_distance: None,
            golf_run_distance: None,
            finish_run_distance: None,
            womens_time_par: None,
            mens_time_par: None,
        }
    }

    /// Startpfad-Slot, falls für dieses Loch deklariert.
    pub fn start_slot(&self) -> Option<&PathSlot> {
        match &self.role {
            HoleRole::First { start } => start.as_ref(),
            _ => None,
        }
    }

    /// Zielpfad-Slot, falls für dieses Loch deklariert.
    pub fn finish_slot(&self) -> Option<&PathSlot> {
        match &self.role {
            HoleRole::Last { finish } => finish.as_ref(),
            _ => None,
        }
    }

    /// Sind alle Scorecard-Pflichtwerte (Golfdistanz, beide Schlagpars)
    /// gesetzt?
    pub fn golf_data_complete(&self) -> bool {
        self.golf_distance.is_some()
            && self.womens_stroke_par.is_some()
            && self.mens_stroke_par.is_some()
    }

    /// Sind beide Polygone (Teebox und Grün) gezeichnet?
    pub fn poly_data_complete(&self) -> bool {
        self.teebox.is_defined() && self.green.is_defined()
    }

    /// Sind alle auf dieses Loch anwendbaren Pfade gezeichnet?
    ///
    /// Loch 1: Startpfad (falls deklariert) und Golfpfad; der
    /// Übergangspfad entfällt, es gibt kein vorheriges Grün.
    /// Letztes Loch: Übergangs- und Golfpfad plus Zielpfad, falls
    /// deklariert. Innere Löcher: Übergangs- und Golfpfad.
    pub fn path_data_complete(&self) -> bool {
        match &self.role {
            HoleRole::First { start } => {
                let leading_ok = start.as_ref().is_none_or(PathSlot::is_defined);
                leading_ok && self.golf.is_defined()
            }
            HoleRole::Interior => self.transition.is_defined() && self.golf.is_defined(),
            HoleRole::Last { finish } => {
                let trailing_ok = finish.as_ref().is_none_or(PathSlot::is_defined);
                self.transition.is_defined() && self.golf.is_defined() && trailing_ok
            }
        }
    }
}
