// File: crates/chart-core/src/store.rs
// Summary: In-memory treatment store keyed by id, with 24 h eviction and Nightscout JSON ingest.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::error::Result;
use crate::grid::start_of_day_ms;
use crate::treatment::{Treatment, TreatmentKind};
use crate::types::MS_PER_HOUR;

/// Treatments older than this (relative to now) are dropped on ingest.
pub const RETENTION_MS: f64 = 24.0 * MS_PER_HOUR;

/// Owned by the data layer; the chart only ever sees a snapshot from
/// [`TreatmentStore::todays`].
#[derive(Clone, Debug, Default)]
pub struct TreatmentStore {
    treatments: HashMap<String, Treatment>,
}

impl TreatmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.treatments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treatments.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Treatment> {
        self.treatments.get(id)
    }

    /// Insert or replace by id.
    pub fn insert(&mut self, treatment: Treatment) {
        self.treatments.insert(treatment.id.clone(), treatment);
    }

    /// Replace the whole content.
    pub fn set_treatments(&mut self, treatments: impl IntoIterator<Item = Treatment>) {
        self.treatments.clear();
        for t in treatments {
            self.insert(t);
        }
    }

    /// Merge a JSON array of Nightscout treatment records, then evict stale
    /// entries. Records missing `_id`, `eventType` or a parseable
    /// `created_at`, and event types the chart does not draw, are skipped.
    /// Returns the number of records taken over.
    pub fn ingest_json(&mut self, raw: &str, now_ms: f64) -> Result<usize> {
        let records: Vec<Value> = serde_json::from_str(raw)?;
        let mut accepted = 0;
        for record in &records {
            if let Some(t) = parse_record(record) {
                self.insert(t);
                accepted += 1;
            }
        }
        let evicted = self.evict_stale(now_ms);
        tracing::debug!(records = records.len(), accepted, evicted, "ingested treatments");
        Ok(accepted)
    }

    /// Drop treatments more than 24 h older than `now_ms`.
    pub fn evict_stale(&mut self, now_ms: f64) -> usize {
        let cutoff = now_ms - RETENTION_MS;
        let before = self.treatments.len();
        self.treatments.retain(|_, t| t.timestamp >= cutoff);
        before - self.treatments.len()
    }

    /// Snapshot of the treatments since the start of `now`'s local day.
    pub fn todays<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<Treatment> {
        let start = start_of_day_ms(now);
        let mut today: Vec<Treatment> =
            self.treatments.values().filter(|t| t.timestamp >= start).cloned().collect();
        today.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        today
    }

    /// All treatments, newest first.
    pub fn sorted(&self) -> Vec<Treatment> {
        let mut all: Vec<Treatment> = self.treatments.values().cloned().collect();
        all.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
        all
    }
}

fn parse_record(record: &Value) -> Option<Treatment> {
    let (Some(id), Some(event_type), Some(created_at)) = (
        record.get("_id").and_then(Value::as_str),
        record.get("eventType").and_then(Value::as_str),
        record.get("created_at").and_then(Value::as_str),
    ) else {
        return None;
    };

    let timestamp = match DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.timestamp_millis() as f64,
        Err(err) => {
            tracing::warn!(id, created_at, %err, "skipping treatment with bad created_at");
            return None;
        }
    };

    let carbs = record
        .get("carbs")
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0) as i32;
    let insulin = record.get("insulin").and_then(Value::as_f64).unwrap_or(0.0);

    let kind = match event_type {
        "Meal Bolus" => TreatmentKind::MealBolus { carbs, insulin },
        "Correction Bolus" => TreatmentKind::CorrectionBolus { insulin },
        "Bolus Wizard" => TreatmentKind::BolusWizard { insulin },
        "Carb Correction" => TreatmentKind::CarbCorrection { carbs },
        _ => return None,
    };
    Some(Treatment::new(id, timestamp, kind))
}
