//! Poultry service — flock activity and egg-production logging.
//!
//! Both log lists are append-only: creation prepends, edits and deletes do
//! not exist. Listings sort a copy by date descending; the store keeps
//! insertion order, so late inserts with earlier dates still display in the
//! right place.

use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use super::today_utc;
use crate::domain::{ActivityStatus, ActivityType, EggProductionLog, PoultryActivity};
use crate::state::PoultryStore;

/// Activity-log form body. `date` defaults to today when omitted.
#[derive(Debug, Deserialize)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub date: Option<Date>,
    pub product: Option<String>,
    pub technician: String,
    pub notes: Option<String>,
}

/// Egg-log form body.
#[derive(Debug, Deserialize)]
pub struct NewEggLog {
    pub date: Option<Date>,
    pub quantity: u32,
    pub collected_by: String,
    pub notes: Option<String>,
}

/// Create an activity record for a flock and prepend it to the log.
/// Every logged activity lands with status `COMPLETED`. The flock id is not
/// validated against the flock list.
pub fn log_activity(store: &mut PoultryStore, flock_id: &str, form: NewActivity) -> PoultryActivity {
    let activity = PoultryActivity {
        id: Uuid::new_v4(),
        flock_id: flock_id.to_string(),
        activity_type: form.activity_type,
        date: form.date.unwrap_or_else(today_utc),
        product: none_if_blank(form.product),
        technician: form.technician,
        status: ActivityStatus::Completed,
        notes: none_if_blank(form.notes),
    };
    store.activities.insert(0, activity.clone());
    activity
}

/// Create an egg-production record for a flock and prepend it to the log.
pub fn log_eggs(store: &mut PoultryStore, flock_id: &str, form: NewEggLog) -> EggProductionLog {
    let log = EggProductionLog {
        id: Uuid::new_v4(),
        flock_id: flock_id.to_string(),
        date: form.date.unwrap_or_else(today_utc),
        quantity: form.quantity,
        collected_by: form.collected_by,
        notes: none_if_blank(form.notes),
    };
    store.egg_logs.insert(0, log.clone());
    log
}

/// Activities for one flock, newest date first.
#[must_use]
pub fn activities_for_flock(store: &PoultryStore, flock_id: &str) -> Vec<PoultryActivity> {
    let mut out: Vec<PoultryActivity> = store
        .activities
        .iter()
        .filter(|a| a.flock_id == flock_id)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Egg logs for one flock, newest date first.
#[must_use]
pub fn egg_logs_for_flock(store: &PoultryStore, flock_id: &str) -> Vec<EggProductionLog> {
    let mut out: Vec<EggProductionLog> = store
        .egg_logs
        .iter()
        .filter(|e| e.flock_id == flock_id)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Summary stats shown above the egg-production list.
#[derive(Debug, serde::Serialize)]
pub struct EggSummary {
    pub entries: usize,
    pub total_quantity: u64,
    pub last_logged: Option<Date>,
}

#[must_use]
pub fn egg_summary(logs: &[EggProductionLog]) -> EggSummary {
    EggSummary {
        entries: logs.len(),
        total_quantity: logs.iter().map(|l| u64::from(l.quantity)).sum(),
        last_logged: logs.iter().map(|l| l.date).max(),
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "poultry_test.rs"]
mod tests;
