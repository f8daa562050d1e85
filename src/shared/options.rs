//! Zentrale Konfiguration der Berechnungs-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Einheiten ───────────────────────────────────────────────────────

/// Fuß pro Meter.
pub const FEET_PER_METER: f64 = 3.28084;
/// Fuß pro Kilometer.
pub const FEET_PER_KILOMETER: f64 = 3280.84;
/// Fuß pro Meile.
pub const FEET_PER_MILE: f64 = 5280.0;
/// Fuß pro Yard.
pub const FEET_PER_YARD: f64 = 3.0;

// ── Geodäsie ────────────────────────────────────────────────────────

/// Erdradius in Fuß (6.371.000 m) für die Haversine-Distanz.
pub const EARTH_RADIUS_FEET: f64 = 6_371_000.0 * FEET_PER_METER;
/// Grad pro Fuß für die planare Interpolation beim Abtasten.
///
/// Kleinwinkel-Näherung (0,3048 m/Fuß x 1e-5 Grad/m), nur auf
/// Golfplatz-Skala gültig. Die Zeitpar-Konstanten sind gegen genau
/// diese Näherung kalibriert; nicht durch echte Geodäsie ersetzen.
pub const DEGREES_PER_FOOT: f64 = 0.3048 * 0.00001;

// ── Lauftempo ───────────────────────────────────────────────────────

/// Par-Lauftempo Herren: 7:00 min/Meile, in Sekunden.
pub const PAR_RUN_PACE_SEC_PER_MILE_MEN: f64 = 7.0 * 60.0;
/// Par-Lauftempo Damen: 9:00 min/Meile, in Sekunden.
pub const PAR_RUN_PACE_SEC_PER_MILE_WOMEN: f64 = 9.0 * 60.0;
/// Zeitbudget pro Schlag (Shot-Box) Herren in Sekunden.
pub const SHOT_BOX_SEC_MEN: f64 = 15.0;
/// Zeitbudget pro Schlag (Shot-Box) Damen in Sekunden.
pub const SHOT_BOX_SEC_WOMEN: f64 = 20.0;
/// Zeitzuschlag pro +1 % Steigung, in Sekunden pro Meile.
pub const UPHILL_ADJUST_SEC_PER_MILE: f64 = 15.0;
/// Zeitabzug pro 1 % Gefälle, in Sekunden pro Meile (asymmetrisch:
/// Steigung kostet mehr als Gefälle einbringt).
pub const DOWNHILL_ADJUST_SEC_PER_MILE: f64 = 8.0;

// ── Abtastung ───────────────────────────────────────────────────────

/// Standard-Abtastabstand für Pfade in Fuß.
pub const SAMPLING_DIST_FEET: f64 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `speedscore_course_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineOptions {
    // ── Abtastung ───────────────────────────────────────────────
    /// Abtastabstand für Pfade in Fuß
    pub sampling_dist_feet: f64,

    // ── Lauftempo ───────────────────────────────────────────────
    /// Par-Lauftempo Herren in Sekunden pro Meile
    pub par_run_pace_sec_per_mile_men: f64,
    /// Par-Lauftempo Damen in Sekunden pro Meile
    pub par_run_pace_sec_per_mile_women: f64,
    /// Shot-Box-Sekunden pro Schlag Herren
    pub shot_box_sec_men: f64,
    /// Shot-Box-Sekunden pro Schlag Damen
    pub shot_box_sec_women: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            sampling_dist_feet: SAMPLING_DIST_FEET,
            par_run_pace_sec_per_mile_men: PAR_RUN_PACE_SEC_PER_MILE_MEN,
            par_run_pace_sec_per_mile_women: PAR_RUN_PACE_SEC_PER_MILE_WOMEN,
            shot_box_sec_men: SHOT_BOX_SEC_MEN,
            shot_box_sec_women: SHOT_BOX_SEC_WOMEN,
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("speedscore_course_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("speedscore_course_engine.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_optionen_entsprechen_konstanten() {
        let opts = EngineOptions::default();
        assert_eq!(opts.sampling_dist_feet, 50.0);
        assert_eq!(opts.par_run_pace_sec_per_mile_men, 420.0);
        assert_eq!(opts.par_run_pace_sec_per_mile_women, 540.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = EngineOptions {
            sampling_dist_feet: 25.0,
            ..EngineOptions::default()
        };
        let content = toml::to_string_pretty(&opts).unwrap();
        let back: EngineOptions = toml::from_str(&content).unwrap();
        assert_eq!(back, opts);
    }
}
