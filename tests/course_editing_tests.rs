//! Integrationstests für den atomaren Bearbeitungs-Durchlauf:
//! - Einrasten an Lochgrenzen beim Anwenden gezeichneter Pfade
//! - Vollständigkeits-Zähler und Einfügepunkte nach jeder Bearbeitung
//! - Scorecard-Bearbeitung und Snapshot-Semantik

use glam::DVec2;
use speedscore_course_engine::{
    apply_path, apply_polygon, apply_scorecard, Course, EngineOptions, GeoPoint, PathKind,
    PolyKind, TeeSet,
};

/// Konstante Höhenquelle; Steigungen spielen in diesen Tests keine Rolle.
fn flat(_lng_lat: DVec2) -> f64 {
    150.0
}

/// Kurzer 2-Punkte-Pfad um einen Anker, leicht versetzt pro Aufruf.
fn line(lat: f64, lng: f64) -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(lat, lng, 0.0),
        GeoPoint::new(lat + 0.0005, lng + 0.0002, 0.0),
    ]
}

/// 3-Loch-Tee-Set mit deklariertem Startpfad, ohne Zielpfad.
fn tee_mit_startpfad() -> TeeSet {
    TeeSet::new("Blau", 3, true, false)
}

// ─── Einrasten ───────────────────────────────────────────────────────────────

#[test]
fn test_uebergangspfad_rastet_am_golfpfad_des_vorgaengers_ein() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();

    let tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);
    let golf_end = tee.holes[0]
        .golf
        .raw
        .last_vertex()
        .expect("Golfpfad Loch 1 gezeichnet");

    // Zeichnung beginnt absichtlich abseits des Golfpfad-Endes
    let tee = apply_path(
        &tee,
        2,
        PathKind::Transition,
        line(45.01, -122.01),
        &flat,
        &opts,
    );
    let trans_start = tee.holes[1]
        .transition
        .raw
        .first_vertex()
        .expect("Übergangspfad Loch 2 gezeichnet");

    assert_eq!(
        trans_start, golf_end,
        "Start des Übergangspfads muss exakt auf dem Golfpfad-Ende des Vorgängers liegen"
    );
}

#[test]
fn test_golfpfad_rastet_am_eigenen_uebergangspfad_ein() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();
    let tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);
    let tee = apply_path(
        &tee,
        2,
        PathKind::Transition,
        line(45.001, -122.001),
        &flat,
        &opts,
    );

    let tee = apply_path(&tee, 2, PathKind::Golf, line(45.02, -122.02), &flat, &opts);

    let trans_end = tee.holes[1].transition.raw.last_vertex().unwrap();
    let golf_start = tee.holes[1].golf.raw.first_vertex().unwrap();
    assert_eq!(golf_start, trans_end);
}

#[test]
fn test_golfpfad_loch_1_bleibt_frei_solange_startpfad_ungezeichnet() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();
    let drawn = line(45.0, -122.0);
    let tee = apply_path(&tee, 1, PathKind::Golf, drawn.clone(), &flat, &opts);
    assert_eq!(
        tee.holes[0].golf.raw.first_vertex().unwrap(),
        drawn[0],
        "Ohne gezeichneten Startpfad gibt es nichts zum Einrasten"
    );
}

#[test]
fn test_innere_vertices_bleiben_woertlich_erhalten() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();
    let tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);

    let drawn = vec![
        GeoPoint::new(45.01, -122.01, 0.0),
        GeoPoint::new(45.012, -122.011, 0.0),
        GeoPoint::new(45.014, -122.012, 0.0),
    ];
    let tee = apply_path(&tee, 2, PathKind::Transition, drawn.clone(), &flat, &opts);
    let points = tee.holes[1].transition.raw.points().unwrap();
    assert_eq!(points[1], drawn[1], "Nur erster/letzter Vertex wird überschrieben");
}

// ─── Vollständigkeit und Einfügepunkte ───────────────────────────────────────

#[test]
fn test_zaehler_und_einfuegepunkt_bei_leerem_startpfad() {
    // Spezifikationsszenario: Startpfad deklariert aber ungezeichnet,
    // alle übrigen Pfade vollständig
    let opts = EngineOptions::default();
    let mut tee = tee_mit_startpfad();
    tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);
    tee = apply_path(&tee, 2, PathKind::Transition, line(45.001, -122.0), &flat, &opts);
    tee = apply_path(&tee, 2, PathKind::Golf, line(45.002, -122.0), &flat, &opts);
    tee = apply_path(&tee, 3, PathKind::Transition, line(45.003, -122.0), &flat, &opts);
    tee = apply_path(&tee, 3, PathKind::Golf, line(45.004, -122.0), &flat, &opts);

    assert_eq!(tee.num_holes_path_data_complete, 2);
    assert_eq!(tee.path_insertion_point.kind, Some(PathKind::Start));
    assert_eq!(tee.path_insertion_point.hole_num, 1);

    // Loch 1: führendes Bein unbekannt, Gesamtergebnis bleibt Sentinel
    assert_eq!(tee.holes[0].run_distance, None);
    // Loch 2: beide Beine gezeichnet, Distanz numerisch
    assert!(tee.holes[1].run_distance.is_some());
}

#[test]
fn test_alle_pfade_gezeichnet_meldet_nichts_uebrig() {
    let opts = EngineOptions::default();
    let mut tee = tee_mit_startpfad();
    tee = apply_path(&tee, 1, PathKind::Start, line(44.999, -122.0), &flat, &opts);
    tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);
    tee = apply_path(&tee, 2, PathKind::Transition, line(45.001, -122.0), &flat, &opts);
    tee = apply_path(&tee, 2, PathKind::Golf, line(45.002, -122.0), &flat, &opts);
    tee = apply_path(&tee, 3, PathKind::Transition, line(45.003, -122.0), &flat, &opts);
    tee = apply_path(&tee, 3, PathKind::Golf, line(45.004, -122.0), &flat, &opts);

    assert_eq!(tee.num_holes_path_data_complete, 3);
    assert_eq!(tee.path_insertion_point.kind, None);
    assert_eq!(tee.path_insertion_point.hole_num, 3);
}

#[test]
fn test_polygon_zaehler_und_einfuegepunkt() {
    let tee = tee_mit_startpfad();
    let square = vec![
        GeoPoint::new(45.0, -122.0, 0.0),
        GeoPoint::new(45.0001, -122.0, 0.0),
        GeoPoint::new(45.0001, -122.0001, 0.0),
        GeoPoint::new(45.0, -122.0001, 0.0),
    ];

    let tee = apply_polygon(&tee, 1, PolyKind::Teebox, square.clone());
    assert_eq!(tee.num_holes_poly_data_complete, 0);
    assert_eq!(tee.poly_insertion_point.kind, Some(PolyKind::Green));
    assert_eq!(tee.poly_insertion_point.hole_num, 1);

    let tee = apply_polygon(&tee, 1, PolyKind::Green, square);
    assert_eq!(tee.num_holes_poly_data_complete, 1);
    assert_eq!(tee.poly_insertion_point.kind, Some(PolyKind::Teebox));
    assert_eq!(tee.poly_insertion_point.hole_num, 2);
}

// ─── Scorecard und Snapshots ─────────────────────────────────────────────────

#[test]
fn test_scorecard_edit_berechnet_zeitpars_nach() {
    let opts = EngineOptions::default();
    let mut tee = TeeSet::new("Weiß", 2, false, false);
    tee = apply_path(&tee, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);

    // Ohne Schlagpars: Distanz numerisch, Zeitpars NaN
    let hole = &tee.holes[0];
    assert!(hole.run_distance.is_some());
    assert!(hole.mens_time_par.unwrap().is_nan());

    let tee = apply_scorecard(&tee, 1, Some(1080.0), Some(4), Some(4), &opts);
    let hole = &tee.holes[0];
    assert_eq!(tee.num_holes_golf_data_complete, 1);
    let mens = hole.mens_time_par.expect("Pfade und Pars vorhanden");
    assert!(mens.is_finite());
    assert!(mens > 4.0 * 15.0, "Zeitpar enthält Shot-Box plus Laufzeit");
}

#[test]
fn test_bearbeitung_laesst_den_alten_snapshot_unveraendert() {
    let opts = EngineOptions::default();
    let before = tee_mit_startpfad();
    let after = apply_path(&before, 1, PathKind::Golf, line(45.0, -122.0), &flat, &opts);

    assert!(!before.holes[0].golf.is_defined());
    assert!(after.holes[0].golf.is_defined());
}

#[test]
fn test_ausservertraglicher_startpfad_auf_loch_2_wird_ignoriert() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();
    let same = apply_path(&tee, 2, PathKind::Start, line(45.0, -122.0), &flat, &opts);
    assert_eq!(same, tee);
}

#[test]
fn test_unbekannte_lochnummer_wird_ignoriert() {
    let opts = EngineOptions::default();
    let tee = tee_mit_startpfad();
    let same = apply_path(&tee, 7, PathKind::Golf, line(45.0, -122.0), &flat, &opts);
    assert_eq!(same, tee);
}

// ─── Persistierte Record-Form ────────────────────────────────────────────────

#[test]
fn test_tee_set_serialisiert_als_verschachtelte_records() {
    let opts = EngineOptions::default();
    let course = Course::new("c1", "Palatine Hills", 3).with_new_tee("Blau", false, false);
    let tee = apply_path(
        &course.tees["Blau"],
        1,
        PathKind::Golf,
        line(45.0, -122.0),
        &flat,
        &opts,
    );
    // Pars setzen, damit die Zeitpars endlich (und damit JSON-treu) sind
    let tee = apply_scorecard(&tee, 1, Some(1080.0), Some(4), Some(4), &opts);
    let course = course.with_tee(tee);

    let value = serde_json::to_value(&course).unwrap();
    assert_eq!(value["num_holes"], 3);
    assert_eq!(value["tees"]["Blau"]["holes"][0]["number"], 1);
    // Kanonische Einheiten: Distanzfelder in Fuß als nackte Zahlen
    assert!(value["tees"]["Blau"]["holes"][0]["golf_run_distance"].is_number());

    let back: Course = serde_json::from_value(value).unwrap();
    assert_eq!(back, course);
}
