//! Der Golfplatz: Identität, Lochanzahl und Tee-Sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tee_set::TeeSet;

/// Ein Golfplatz mit seinen Tee-Sets.
///
/// Tee-Sets sind per Name eindeutig; `IndexMap` hält die
/// Einfüge-Reihenfolge deterministisch. Bearbeitungen erzeugen neue
/// Snapshots von unten nach oben (Loch, Tee-Set, Platz), geteilte
/// Snapshots werden nie teilweise mutiert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Eindeutige Platz-ID (vom externen Speicher vergeben)
    pub id: String,
    /// Anzeigename des Platzes
    pub name: String,
    /// Lochanzahl des Platzes; alle Tee-Sets haben genau so viele Löcher
    pub num_holes: u32,
    /// Tee-Sets per Name, in Einfüge-Reihenfolge
    pub tees: IndexMap<String, TeeSet>,
}

impl Course {
    /// Erstellt einen Platz ohne Tee-Sets.
    pub fn new(id: &str, name: &str, num_holes: u32) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            num_holes,
            tees: IndexMap::new(),
        }
    }

    /// Snapshot mit einem zusätzlichen, frisch gerüsteten Tee-Set.
    ///
    /// Existiert der Name bereits, bleibt der Platz unverändert.
    pub fn with_new_tee(&self, name: &str, with_start_path: bool, with_finish_path: bool) -> Self {
        if self.tees.contains_key(name) {
            log::warn!("Tee-Set \"{}\" existiert bereits auf \"{}\"", name, self.name);
            return self.clone();
        }
        let mut next = self.clone();
        next.tees.insert(
            name.to_owned(),
            TeeSet::new(name, self.num_holes, with_start_path, with_finish_path),
        );
        next
    }

    /// Snapshot mit einem ersetzten Tee-Set (Schlüssel = `tee.name`).
    ///
    /// Ist das Tee-Set unbekannt, bleibt der Platz unverändert.
    pub fn with_tee(&self, tee: TeeSet) -> Self {
        if !self.tees.contains_key(&tee.name) {
            log::warn!("Unbekanntes Tee-Set \"{}\" auf \"{}\"", tee.name, self.name);
            return self.clone();
        }
        let mut next = self.clone();
        next.tees.insert(tee.name.clone(), tee);
        next
    }

    /// Snapshot mit umbenanntem Tee-Set; die Position in der
    /// Reihenfolge bleibt erhalten.
    pub fn with_renamed_tee(&self, old_name: &str, new_name: &str) -> Self {
        if !self.tees.contains_key(old_name) || self.tees.contains_key(new_name) {
            log::warn!(
                "Tee-Set-Umbenennung \"{}\" -> \"{}\" nicht möglich",
                old_name,
                new_name
            );
            return self.clone();
        }
        let mut next = self.clone();
        next.tees = self
            .tees
            .iter()
            .map(|(key, tee)| {
                if key == old_name {
                    let mut renamed = tee.clone();
                    renamed.name = new_name.to_owned();
                    (new_name.to_owned(), renamed)
                } else {
                    (key.clone(), tee.clone())
                }
            })
            .collect();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_hinzufuegen_und_umbenennen_haelt_reihenfolge() {
        let course = Course::new("c1", "Palatine Hills", 18)
            .with_new_tee("Blau", true, true)
            .with_new_tee("Weiß", false, false);
        assert_eq!(course.tees.len(), 2);

        let renamed = course.with_renamed_tee("Blau", "Gold");
        let keys: Vec<&String> = renamed.tees.keys().collect();
        assert_eq!(keys, ["Gold", "Weiß"]);
        assert_eq!(renamed.tees["Gold"].name, "Gold");
    }

    #[test]
    fn test_doppelter_tee_name_laesst_platz_unveraendert() {
        let course = Course::new("c1", "Palatine Hills", 9).with_new_tee("Blau", false, false);
        let again = course.with_new_tee("Blau", true, true);
        assert_eq!(again, course);
    }
}
