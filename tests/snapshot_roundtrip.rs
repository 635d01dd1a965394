use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cinema_booking::engine::BookingEngine;
use cinema_booking::store::JsonFileStore;
use cinema_booking::utils::parse_screening_time;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_data_file(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("cinema-{prefix}-{pid}-{t}-{id}.json"))
}

fn populated_engine(data_file: &PathBuf) -> (BookingEngine, u64) {
    let mut engine = BookingEngine::new(Box::new(JsonFileStore), data_file);
    engine.add_movie("The Matrix", 120, "Sci-Fi").expect("add movie");
    engine.add_movie("Inception", 150, "Thriller").expect("add movie");
    engine.add_hall("2", 100).expect("add hall");
    let screening = engine
        .add_screening(
            "The Matrix",
            parse_screening_time("2024-06-01 20:00").expect("parse time"),
            "2",
        )
        .expect("add screening");
    let screening_id = screening.id();
    engine.buy_ticket(screening_id, "B10").expect("buy ticket");
    (engine, screening_id)
}

#[test]
fn full_state_survives_save_and_load() {
    let data_file = unique_data_file("roundtrip");
    let (engine, screening_id) = populated_engine(&data_file);
    engine.save(None).expect("save snapshot");

    let mut fresh = BookingEngine::new(Box::new(JsonFileStore), &data_file);
    assert!(fresh.load(None).expect("load snapshot"));

    assert_eq!(fresh.movies().len(), 2);
    assert_eq!(fresh.halls().len(), 1);
    assert_eq!(fresh.screenings().len(), 1);
    assert_eq!(fresh.tickets().len(), 1);

    let screening = fresh.screening(screening_id).expect("screening survived");
    assert_eq!(screening.movie().title(), "The Matrix");
    assert_eq!(screening.available_seats(), 99);
    assert_eq!(screening.tickets_sold(), 1);

    let ticket = &fresh.tickets()[0];
    assert_eq!(ticket.seat_number(), "B10");
    assert_eq!(ticket.price(), 8 + 3 + 2 + 1);

    fs::remove_file(&data_file).ok();
}

#[test]
fn reloaded_seat_stays_taken_in_fresh_engine() {
    let data_file = unique_data_file("occupancy");
    let (engine, screening_id) = populated_engine(&data_file);
    engine.save(None).expect("save snapshot");

    let mut fresh = BookingEngine::new(Box::new(JsonFileStore), &data_file);
    assert!(fresh.load(None).expect("load snapshot"));

    let screening = fresh.screening(screening_id).expect("screening survived");
    let available = fresh.seats_available(screening);
    assert!(!available.contains(&"B10".to_string()));
    assert_eq!(available.len(), 99);

    assert!(fresh.buy_ticket(screening_id, "B10").is_none());
    assert!(fresh.buy_ticket(screening_id, "C3").is_some());

    fs::remove_file(&data_file).ok();
}

#[test]
fn bootstrap_prefers_snapshot_over_seed_data() {
    let data_file = unique_data_file("bootstrap");
    let (engine, _) = populated_engine(&data_file);
    engine.save(None).expect("save snapshot");

    let mut fresh = BookingEngine::new(Box::new(JsonFileStore), &data_file);
    fresh.bootstrap().expect("bootstrap");

    // seed data was overlaid by the snapshot: 2 movies, not 3; 1 hall, not 2
    assert_eq!(fresh.movies().len(), 2);
    assert_eq!(fresh.halls().len(), 1);
    assert_eq!(fresh.tickets().len(), 1);

    fs::remove_file(&data_file).ok();
}

#[test]
fn bootstrap_without_snapshot_falls_back_to_seed_data() {
    let data_file = unique_data_file("no-snapshot");
    let mut engine = BookingEngine::new(Box::new(JsonFileStore), &data_file);
    engine.bootstrap().expect("bootstrap");

    assert_eq!(engine.movies().len(), 3);
    assert_eq!(engine.halls().len(), 2);
    assert!(engine.screenings().is_empty());
    assert!(engine.tickets().is_empty());
    assert!(!data_file.exists());
}

#[test]
fn snapshot_document_has_four_named_sequences() {
    let data_file = unique_data_file("format");
    let (engine, _) = populated_engine(&data_file);
    engine.save(None).expect("save snapshot");

    let raw = fs::read_to_string(&data_file).expect("read snapshot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    assert_eq!(value["movies"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["halls"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["screenings"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["tickets"].as_array().map(Vec::len), Some(1));

    // nested entities are inlined by value, time in its fixed format
    let screening = &value["screenings"][0];
    assert_eq!(screening["movie"]["title"], "The Matrix");
    assert_eq!(screening["hall"]["hall_number"], "2");
    assert_eq!(screening["screening_time"], "2024-06-01 20:00");
    assert_eq!(value["tickets"][0]["screening"]["movie"]["title"], "The Matrix");

    fs::remove_file(&data_file).ok();
}

#[test]
fn corrupt_snapshot_is_a_fatal_error_not_a_miss() {
    let data_file = unique_data_file("corrupt");
    fs::write(&data_file, "not json at all").expect("write corrupt file");

    let mut engine = BookingEngine::new(Box::new(JsonFileStore), &data_file);
    assert!(engine.load(None).is_err());

    fs::remove_file(&data_file).ok();
}
