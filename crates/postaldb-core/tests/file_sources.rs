use std::io::Write;
use std::sync::Arc;

use postaldb_core::prelude::*;

const US_LINES: &str = "\
US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522\t4
US\t18430\tLake Ariel\tPennsylvania\tPA\tWayne\t127\t\t\t41.4345\t-75.2065\t4
US\t18436\tLake Como\tPennsylvania\tPA\tWayne\t127\t\t\t41.8542\t-75.3213\t4
US\t10001\tNew York\tNew York\tNY\tNew York\t061\t\t\t40.7484\t-73.9967\t4
";

const DE_LINES: &str = "\
DE\t10115\tBerlin\tBerlin\tBE\t\t00\tBerlin, Stadt\t11000\t52.5323\t13.3846\t6
DE\t80331\tMünchen\tBayern\tBY\tOberbayern\t091\tMünchen, Landeshauptstadt\t09162\t48.1372\t11.5755\t4
";

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_plain_text_files() {
    let dir = tempfile::tempdir().unwrap();
    let us = write_file(&dir, "US.txt", US_LINES);
    let de = write_file(&dir, "DE.txt", DE_LINES);

    let (db, report) = build_with_report(&[FileSource::new(us), FileSource::new(de)]);
    assert_eq!(db.size(), 6);
    assert_eq!(report.sources_loaded, 2);
    assert_eq!(db.stats(), DbStats { places: 6, countries: 2 });

    let munich = db.by_name("münchen").unwrap();
    assert_eq!(munich.len(), 1);
    assert_eq!(munich[0].admin_code1(), Some("BY"));
}

#[test]
fn missing_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let us = write_file(&dir, "US.txt", US_LINES);

    let sources = [FileSource::new(dir.path().join("nope.txt")), FileSource::new(us)];
    let (db, report) = build_with_report(&sources);
    assert_eq!(db.size(), 4);
    assert_eq!(report.sources_failed, 1);
    assert_eq!(report.sources_loaded, 1);
}

#[test]
fn same_file_twice_does_not_double_count() {
    let dir = tempfile::tempdir().unwrap();
    let us = write_file(&dir, "US.txt", US_LINES);

    let (db, report) = build_with_report(&[FileSource::new(&us), FileSource::new(&us)]);
    assert_eq!(db.size(), 4);
    assert_eq!(report.duplicates, 4);
    assert_eq!(db.places()[0].postal_code(), "18431");
    assert_eq!(db.places()[3].postal_code(), "10001");
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzip_files() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("US.txt.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(US_LINES.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let db = build(&[FileSource::new(path)]);
    assert_eq!(db.size(), 4);
    assert_eq!(db.by_postal_code("1843.").unwrap().len(), 3);
}

#[test]
fn radius_search_on_loaded_data() {
    let db = build(&[ReaderSource::from_static("US", US_LINES)]);
    let origin = db.by_postal_code("18431").unwrap()[0].clone();

    let near: Vec<&str> = db
        .within_miles_of_place(&origin, 15.0)
        .into_iter()
        .map(Place::place_name)
        .collect();
    assert_eq!(near, vec!["Lakewood", "Lake Ariel"]);

    // Lake Como is ~34 miles north.
    let wider = db.within_miles_of_place(&origin, 40.0);
    assert_eq!(wider.len(), 3);

    let only_origin = db.within_miles_of(41.3612, -75.2522, 1.0);
    assert_eq!(only_origin, vec![&origin]);
}

#[test]
fn shared_between_threads() {
    let db = Arc::new(build(&[
        ReaderSource::from_static("US", US_LINES),
        ReaderSource::from_static("DE", DE_LINES),
    ]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let db = Arc::clone(&db);
            std::thread::spawn(move || {
                let hits = db.within_kilometers_of(52.5323, 13.3846, 10.0).len();
                let names = db.by_name("lake.*").unwrap().len();
                (hits, names)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (1, 3));
    }
}

#[test]
fn places_serialize_to_json() {
    let db = build(&[ReaderSource::from_static("US", US_LINES)]);
    let json = serde_json::to_value(&db.places()[0]).unwrap();
    assert_eq!(json["postal_code"], "18431");
    assert_eq!(json["accuracy"], 4);

    let back: Place = serde_json::from_value(json).unwrap();
    assert_eq!(&back, &db.places()[0]);
}
