//! Domain record shapes.
//!
//! Flat, independent records consumed by the page routes and the consultant
//! snapshot. There is no referential integrity between collections: a
//! `flock_id` or `pond_id` carried by a log entry is never validated against
//! the flock/pond stores, so dangling references are representable.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

// =============================================================================
// POULTRY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlockPurpose {
    Layer,
    Broiler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlockStatus {
    Active,
    Closed,
}

/// A tracked group of poultry managed as one unit.
///
/// `current_count` is seed data only — no operation mutates it. Mortality
/// logging is not wired to count reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flock {
    pub id: String,
    pub breed: String,
    pub start_date: Date,
    pub initial_count: u32,
    pub current_count: u32,
    pub purpose: FlockPurpose,
    pub status: FlockStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Vaccination,
    Debeaking,
    Medication,
    Cleaning,
    Grading,
    VaccinationBooster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Scheduled,
    Completed,
}

/// A husbandry event (vaccination, cleaning, …) logged against a flock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoultryActivity {
    pub id: Uuid,
    pub flock_id: String,
    pub activity_type: ActivityType,
    pub date: Date,
    pub product: Option<String>,
    pub technician: String,
    pub status: ActivityStatus,
    pub notes: Option<String>,
}

/// A daily egg-collection record for a layer flock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggProductionLog {
    pub id: Uuid,
    pub flock_id: String,
    pub date: Date,
    pub quantity: u32,
    pub collected_by: String,
    pub notes: Option<String>,
}

// =============================================================================
// CATFISH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PondStatus {
    Active,
    Harvested,
}

/// A tracked body of water holding catfish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pond {
    pub id: String,
    pub name: String,
    pub size_m2: f64,
    pub stocking_date: Date,
    pub last_water_change: Date,
    pub initial_count: u32,
    pub current_count: u32,
    pub status: PondStatus,
}

/// A pond maintenance record. Created by the water-change quick action and
/// by seed data; append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLogEntry {
    pub id: Uuid,
    pub pond_id: String,
    pub date: Date,
    pub technician: String,
    pub notes: String,
}

// =============================================================================
// FINANCE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
}

/// A ledger entry. Negative amounts are expenses, positive are sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: Date,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub status: TransactionStatus,
}

// =============================================================================
// ALERTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub date: Date,
    pub is_read: bool,
}

// =============================================================================
// CONSULTANT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the consultant transcript. Append-only for the lifetime of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, text: text.into() }
    }
}

/// Immutable farm-context snapshot passed by value into the advice flow.
/// Serialized verbatim into the prompt — no redaction or size limiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub name: String,
    pub poultry_count: u32,
    pub pond_count: usize,
    pub avg_mortality: String,
    pub feed_stock: String,
}

#[cfg(test)]
#[path = "domain_test.rs"]
mod tests;
