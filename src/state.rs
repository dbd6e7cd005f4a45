//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Each
//! page module owns one store behind its own `RwLock` — poultry, catfish,
//! finance, and the consultant transcript never share a lock, mirroring the
//! fact that no cross-module consistency is ever required. Stores are seeded
//! at startup and reset on restart; there is no persistence layer.

use std::sync::Arc;

use time::macros::date;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::advice::FarmAdvice;
use crate::domain::{
    ActivityStatus, ActivityType, Alert, AlertSeverity, ChatMessage, EggProductionLog, FarmSnapshot, Flock,
    FlockPurpose, FlockStatus, Pond, PondStatus, PoultryActivity, Transaction, TransactionStatus, WaterLogEntry,
};

/// Greeting seeded into the transcript when the service starts.
pub const CONSULTANT_GREETING: &str =
    "Hello! I am your FMS AI consultant. How can I help you optimize your farm today?";

// =============================================================================
// STORES
// =============================================================================

/// Poultry page store: flocks plus the two append-only log lists.
/// Logs are prepended on insert and sorted by date at render time.
pub struct PoultryStore {
    pub flocks: Vec<Flock>,
    pub activities: Vec<PoultryActivity>,
    pub egg_logs: Vec<EggProductionLog>,
}

impl PoultryStore {
    #[must_use]
    pub fn seeded() -> Self {
        let flocks = vec![
            Flock {
                id: "F001".into(),
                breed: "Isa Brown".into(),
                start_date: date!(2024 - 01 - 15),
                initial_count: 5000,
                current_count: 4920,
                purpose: FlockPurpose::Layer,
                status: FlockStatus::Active,
            },
            Flock {
                id: "F002".into(),
                breed: "Cobb 500".into(),
                start_date: date!(2024 - 02 - 10),
                initial_count: 2000,
                current_count: 1980,
                purpose: FlockPurpose::Broiler,
                status: FlockStatus::Active,
            },
        ];
        let activities = vec![
            PoultryActivity {
                id: Uuid::new_v4(),
                flock_id: "F001".into(),
                activity_type: ActivityType::Vaccination,
                date: date!(2024 - 01 - 20),
                product: Some("Newcastle Disease Vaccine".into()),
                technician: "Dr. Sarah".into(),
                status: ActivityStatus::Completed,
                notes: Some("First dose administered".into()),
            },
            PoultryActivity {
                id: Uuid::new_v4(),
                flock_id: "F001".into(),
                activity_type: ActivityType::Debeaking,
                date: date!(2024 - 02 - 05),
                product: None,
                technician: "James Wilson".into(),
                status: ActivityStatus::Completed,
                notes: Some("Precision debeaking performed on all layers".into()),
            },
            PoultryActivity {
                id: Uuid::new_v4(),
                flock_id: "F001".into(),
                activity_type: ActivityType::Vaccination,
                date: date!(2024 - 03 - 25),
                product: Some("Gumboro Vaccine".into()),
                technician: "Dr. Sarah".into(),
                status: ActivityStatus::Scheduled,
                notes: Some("Mandatory booster".into()),
            },
            PoultryActivity {
                id: Uuid::new_v4(),
                flock_id: "F002".into(),
                activity_type: ActivityType::Cleaning,
                date: date!(2024 - 03 - 15),
                product: None,
                technician: "Mike Ross".into(),
                status: ActivityStatus::Completed,
                notes: Some("Coop sanitation and litter replacement".into()),
            },
        ];
        let egg_logs = vec![
            EggProductionLog {
                id: Uuid::new_v4(),
                flock_id: "F001".into(),
                date: date!(2024 - 03 - 20),
                quantity: 4200,
                collected_by: "Mike Ross".into(),
                notes: Some("Good yield today".into()),
            },
            EggProductionLog {
                id: Uuid::new_v4(),
                flock_id: "F001".into(),
                date: date!(2024 - 03 - 19),
                quantity: 4150,
                collected_by: "Dr. Sarah".into(),
                notes: Some("Slightly lower due to heat".into()),
            },
        ];
        Self { flocks, activities, egg_logs }
    }
}

/// Catfish page store: ponds plus the append-only water-change log.
pub struct CatfishStore {
    pub ponds: Vec<Pond>,
    pub water_logs: Vec<WaterLogEntry>,
}

impl CatfishStore {
    #[must_use]
    pub fn seeded() -> Self {
        let ponds = vec![
            Pond {
                id: "P01".into(),
                name: "Main Pond A".into(),
                size_m2: 50.0,
                stocking_date: date!(2023 - 11 - 20),
                last_water_change: date!(2024 - 03 - 12),
                initial_count: 1000,
                current_count: 985,
                status: PondStatus::Active,
            },
            Pond {
                id: "P02".into(),
                name: "Nursery 1".into(),
                size_m2: 20.0,
                stocking_date: date!(2024 - 01 - 05),
                last_water_change: date!(2024 - 03 - 14),
                initial_count: 2000,
                current_count: 1990,
                status: PondStatus::Active,
            },
            Pond {
                id: "P03".into(),
                name: "Main Pond B".into(),
                size_m2: 50.0,
                stocking_date: date!(2023 - 08 - 15),
                last_water_change: date!(2023 - 12 - 01),
                initial_count: 1000,
                current_count: 0,
                status: PondStatus::Harvested,
            },
        ];
        let water_logs = vec![
            WaterLogEntry {
                id: Uuid::new_v4(),
                pond_id: "P01".into(),
                date: date!(2024 - 03 - 12),
                technician: "James Wilson".into(),
                notes: "Standard cleaning, 50% water exchange.".into(),
            },
            WaterLogEntry {
                id: Uuid::new_v4(),
                pond_id: "P01".into(),
                date: date!(2024 - 03 - 08),
                technician: "James Wilson".into(),
                notes: "Routine water change.".into(),
            },
            WaterLogEntry {
                id: Uuid::new_v4(),
                pond_id: "P02".into(),
                date: date!(2024 - 03 - 14),
                technician: "Sarah Connor".into(),
                notes: "Full tank cleaning and water refresh.".into(),
            },
        ];
        Self { ponds, water_logs }
    }
}

/// Finance page store: the transaction ledger.
pub struct FinanceStore {
    pub transactions: Vec<Transaction>,
}

impl FinanceStore {
    #[must_use]
    pub fn seeded() -> Self {
        let transactions = vec![
            Transaction {
                id: Uuid::new_v4(),
                date: date!(2024 - 03 - 10),
                description: "Feed Purchase (Layer Mash)".into(),
                category: "Inventory".into(),
                amount: -4200.0,
                status: TransactionStatus::Completed,
            },
            Transaction {
                id: Uuid::new_v4(),
                date: date!(2024 - 03 - 09),
                description: "Sale: 500 Broilers Batch #A2".into(),
                category: "Sale".into(),
                amount: 7500.0,
                status: TransactionStatus::Completed,
            },
            Transaction {
                id: Uuid::new_v4(),
                date: date!(2024 - 03 - 08),
                description: "Medicine & Vaccines".into(),
                category: "Health".into(),
                amount: -850.0,
                status: TransactionStatus::Pending,
            },
            Transaction {
                id: Uuid::new_v4(),
                date: date!(2024 - 03 - 08),
                description: "Sale: 400 Trays of Eggs".into(),
                category: "Sale".into(),
                amount: 1200.0,
                status: TransactionStatus::Completed,
            },
        ];
        Self { transactions }
    }
}

/// Alerts store. Seed-only placeholder; the alerts page has no mutations.
pub struct AlertStore {
    pub alerts: Vec<Alert>,
}

impl AlertStore {
    #[must_use]
    pub fn seeded() -> Self {
        let alerts = vec![
            Alert {
                id: Uuid::new_v4(),
                severity: AlertSeverity::Medium,
                title: "Water Quality Alert".into(),
                message: "Ammonia trending high in Pond #12.".into(),
                date: date!(2024 - 03 - 14),
                is_read: true,
            },
            Alert {
                id: Uuid::new_v4(),
                severity: AlertSeverity::Low,
                title: "Feed Stock".into(),
                message: "Layer mash below two-week reserve.".into(),
                date: date!(2024 - 03 - 11),
                is_read: true,
            },
            Alert {
                id: Uuid::new_v4(),
                severity: AlertSeverity::Low,
                title: "Scheduled Vaccination".into(),
                message: "Gumboro booster due for flock F001.".into(),
                date: date!(2024 - 03 - 10),
                is_read: true,
            },
        ];
        Self { alerts }
    }
}

/// Consultant transcript: ordered, append-only message list plus the
/// "assistant is composing" flag.
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl Transcript {
    #[must_use]
    pub fn seeded() -> Self {
        Self { messages: vec![ChatMessage::assistant(CONSULTANT_GREETING)], pending: false }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub farm_name: String,
    pub poultry: Arc<RwLock<PoultryStore>>,
    pub catfish: Arc<RwLock<CatfishStore>>,
    pub finance: Arc<RwLock<FinanceStore>>,
    pub alerts: Arc<RwLock<AlertStore>>,
    pub transcript: Arc<RwLock<Transcript>>,
    /// Optional advice client. `None` if the Gemini env vars are not
    /// configured; every consultant submission then takes the fallback path.
    pub advice: Option<Arc<dyn FarmAdvice>>,
}

impl AppState {
    #[must_use]
    pub fn new(advice: Option<Arc<dyn FarmAdvice>>) -> Self {
        Self {
            farm_name: "Green Valley Farm".into(),
            poultry: Arc::new(RwLock::new(PoultryStore::seeded())),
            catfish: Arc::new(RwLock::new(CatfishStore::seeded())),
            finance: Arc::new(RwLock::new(FinanceStore::seeded())),
            alerts: Arc::new(RwLock::new(AlertStore::seeded())),
            transcript: Arc::new(RwLock::new(Transcript::seeded())),
            advice,
        }
    }

    /// Build an owned farm-context snapshot from the current store contents.
    /// Passed by value into the advice flow at each call site.
    pub async fn farm_snapshot(&self) -> FarmSnapshot {
        let poultry_count = {
            let poultry = self.poultry.read().await;
            poultry
                .flocks
                .iter()
                .filter(|f| f.status == FlockStatus::Active)
                .map(|f| f.current_count)
                .sum()
        };
        let pond_count = {
            let catfish = self.catfish.read().await;
            catfish
                .ponds
                .iter()
                .filter(|p| p.status == PondStatus::Active)
                .count()
        };
        FarmSnapshot {
            name: self.farm_name.clone(),
            poultry_count,
            pond_count,
            avg_mortality: "1.2%".into(),
            feed_stock: "4,500kg".into(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
