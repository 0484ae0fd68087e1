// File: crates/chart-core/tests/store.rs
// Purpose: Treatment store: JSON ingest, replace-by-id, 24 h eviction and today's snapshot.

mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::{ms, noon, HOUR};
use glucose_chart_core::grid::start_of_day_ms;
use glucose_chart_core::{ChartError, Treatment, TreatmentKind, TreatmentStore};

const FEED: &str = r#"[
    {"_id": "a1", "eventType": "Meal Bolus", "created_at": "2024-03-05T07:30:00Z", "carbs": 45, "insulin": 4.5},
    {"_id": "a2", "eventType": "Correction Bolus", "created_at": "2024-03-05T10:15:00Z", "insulin": 1.5},
    {"_id": "a3", "eventType": "Bolus Wizard", "created_at": "2024-03-05T11:00:00.000Z", "insulin": 2},
    {"_id": "a4", "eventType": "Carb Correction", "created_at": "2024-03-04T22:00:00Z", "carbs": 12.0},
    {"_id": "a5", "eventType": "Temp Basal", "created_at": "2024-03-05T09:00:00Z"},
    {"_id": "a6", "eventType": "Meal Bolus", "created_at": "yesterday", "carbs": 20},
    {"eventType": "Meal Bolus", "created_at": "2024-03-05T09:00:00Z", "carbs": 20},
    {"_id": "old", "eventType": "Meal Bolus", "created_at": "2024-03-03T08:00:00Z", "carbs": 30}
]"#;

#[test]
fn ingest_maps_known_event_types() {
    let now = noon();
    let mut store = TreatmentStore::new();
    let accepted = store.ingest_json(FEED, ms(&now)).expect("valid json");

    // a1..a4 plus the stale one, which is then evicted
    assert_eq!(accepted, 5);
    assert_eq!(store.len(), 4);
    assert!(store.get("old").is_none());
    assert!(store.get("a5").is_none());

    assert_eq!(store.get("a1").map(|t| t.kind), Some(TreatmentKind::MealBolus { carbs: 45, insulin: 4.5 }));
    assert_eq!(store.get("a3").map(|t| t.kind), Some(TreatmentKind::BolusWizard { insulin: 2.0 }));
    assert_eq!(store.get("a4").map(|t| t.kind), Some(TreatmentKind::CarbCorrection { carbs: 12 }));
    assert_eq!(store.get("a2").map(|t| t.event_type()), Some("Correction Bolus"));
    assert_eq!(
        store.get("a1").map(|t| t.timestamp),
        Some(Utc.with_ymd_and_hms(2024, 3, 5, 7, 30, 0).unwrap().timestamp_millis() as f64)
    );
}

#[test]
fn malformed_json_is_an_error() {
    let mut store = TreatmentStore::new();
    let err = store.ingest_json("{not json", 0.0).unwrap_err();
    assert!(matches!(err, ChartError::TreatmentJson(_)));
    assert!(store.is_empty());
}

#[test]
fn same_id_replaces_previous_entry() {
    let t = ms(&noon());
    let mut store = TreatmentStore::new();
    store.insert(Treatment::meal_bolus("x", t, 10, 1.0));
    store.insert(Treatment::meal_bolus("x", t, 25, 2.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("x").map(|t| t.kind), Some(TreatmentKind::MealBolus { carbs: 25, insulin: 2.0 }));
}

#[test]
fn eviction_drops_entries_older_than_a_day() {
    let t = ms(&noon());
    let mut store = TreatmentStore::new();
    store.set_treatments([
        Treatment::carb_correction("fresh", t - HOUR, 10),
        Treatment::carb_correction("edge", t - 24.0 * HOUR, 10),
        Treatment::carb_correction("stale", t - 25.0 * HOUR, 10),
    ]);
    assert_eq!(store.evict_stale(t), 1);
    assert!(store.get("edge").is_some());
    assert!(store.get("stale").is_none());
}

#[test]
fn todays_snapshot_starts_at_local_midnight() {
    let now = noon();
    let mut store = TreatmentStore::new();
    store.ingest_json(FEED, ms(&now)).expect("valid json");

    let ids: Vec<String> = store.todays(&now).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);

    // 22:00 UTC yesterday is already today three hours east
    let east = FixedOffset::east_opt(3 * 3600).unwrap();
    let ids: Vec<String> = store.todays(&now.with_timezone(&east)).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["a4", "a1", "a2", "a3"]);
}

#[test]
fn sorted_lists_newest_first() {
    let t = ms(&noon());
    let mut store = TreatmentStore::new();
    store.set_treatments([
        Treatment::bolus_wizard("b", t - 2.0 * HOUR, 1.0),
        Treatment::bolus_wizard("c", t - HOUR, 1.0),
        Treatment::bolus_wizard("a", t - 3.0 * HOUR, 1.0),
    ]);
    let ids: Vec<String> = store.sorted().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn start_of_day_in_utc() {
    let now = noon();
    assert_eq!(start_of_day_ms(&now), ms(&now) - 12.0 * HOUR);
}
