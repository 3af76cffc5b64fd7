/// Integrationstest: Parst das Report-JSON-Fixture wie einen echten
/// ODM-Export
use odm_shot_coverage::parse_reconstruction_json;

#[test]
fn test_parse_reconstruction_shot_points() {
    let json = std::fs::read_to_string("tests/fixtures/report/reconstruction_shot_points.json")
        .unwrap();
    match parse_reconstruction_json(&json) {
        Ok(rec) => {
            println!(
                "OK: {} shots, {} points, {} cameras",
                rec.shot_count(),
                rec.point_count(),
                rec.camera_count()
            );
            assert!(rec.shot_count() > 0);
            assert!(rec.point_count() > 0);
        }
        Err(e) => panic!("Parse-Fehler: {e:#}"),
    }
}

/// Testet die Invertierung der Shot→Punkt-Zuordnung auf dem Fixture
#[test]
fn test_point_observer_lists_from_shot_points() {
    let json = std::fs::read_to_string("tests/fixtures/report/reconstruction_shot_points.json")
        .unwrap();
    let rec = parse_reconstruction_json(&json).expect("Parse fehlgeschlagen");

    // shotPoints ist eine BTreeMap; die Beobachterlisten folgen der
    // sortierten Shot-Reihenfolge
    assert_eq!(rec.shots_for_point(7), ["GOPR0101.JPG", "GOPR0102.JPG"]);
    assert_eq!(rec.shots_for_point(9), ["GOPR0102.JPG", "GOPR0103.JPG"]);
    assert!(rec.shots_for_point(999).is_empty());
}
