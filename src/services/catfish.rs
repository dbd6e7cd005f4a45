//! Catfish service — pond maintenance and the water-change quick action.

use time::Date;
use uuid::Uuid;

use super::today_utc;
use crate::domain::{Pond, PondStatus, WaterLogEntry};
use crate::state::CatfishStore;

/// Note stamped on quick-action log entries.
const QUICK_ACTION_NOTE: &str = "Water change recorded via quick action.";

#[derive(Debug, thiserror::Error)]
pub enum PondError {
    /// No active pond with this id.
    #[error("pond not found: {0}")]
    NotFound(String),
}

/// The water-change quick action: set the pond's last-change date to today
/// and prepend one log entry with the same pond id and date. Both updates
/// happen under the caller's single store lock; no other pond is touched.
///
/// # Errors
///
/// Returns [`PondError::NotFound`] for an unknown or harvested pond id.
pub fn record_water_change(store: &mut CatfishStore, pond_id: &str) -> Result<WaterLogEntry, PondError> {
    let today = today_utc();
    let pond = store
        .ponds
        .iter_mut()
        .find(|p| p.id == pond_id && p.status == PondStatus::Active)
        .ok_or_else(|| PondError::NotFound(pond_id.to_string()))?;
    pond.last_water_change = today;

    let entry = WaterLogEntry {
        id: Uuid::new_v4(),
        pond_id: pond_id.to_string(),
        date: today,
        technician: "Current User".into(),
        notes: QUICK_ACTION_NOTE.into(),
    };
    store.water_logs.insert(0, entry.clone());
    Ok(entry)
}

/// Maintenance logs for one pond, newest date first.
#[must_use]
pub fn water_logs_for_pond(store: &CatfishStore, pond_id: &str) -> Vec<WaterLogEntry> {
    let mut out: Vec<WaterLogEntry> = store
        .water_logs
        .iter()
        .filter(|l| l.pond_id == pond_id)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Whole days since the pond's last water change, clamped at zero.
#[must_use]
pub fn days_since_water_change(pond: &Pond, today: Date) -> i64 {
    (today - pond.last_water_change).whole_days().max(0)
}

#[cfg(test)]
#[path = "catfish_test.rs"]
mod tests;
