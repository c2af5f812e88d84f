//! Record sources feeding the dashboard
//!
//! A [`RecordSource`] hands over the three raw collections the dashboard
//! needs. Storage and transport live behind the trait; the engine only sees
//! plain vectors.
//!
//! Implementations:
//! - `json` - a directory of `trips.json`, `vehicles.json`, `expenses.json`

mod json;

pub use json::{JsonDirSource, EXPENSES_FILE, TRIPS_FILE, VEHICLES_FILE};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Expense, Trip, Vehicle};

/// Supplies trips, vehicles and expenses.
///
/// The three fetches are independent; the loader calls them concurrently and
/// tolerates any of them failing.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name for log output
    fn name(&self) -> &str;

    async fn fetch_trips(&self) -> Result<Vec<Trip>>;

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>>;

    async fn fetch_expenses(&self) -> Result<Vec<Expense>>;
}

/// Raw collections from one load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub trips: Vec<Trip>,
    pub vehicles: Vec<Vehicle>,
    pub expenses: Vec<Expense>,
}

/// Fetch all three collections concurrently.
///
/// A failed fetch is logged and replaced with an empty collection, so this
/// always returns a snapshot (possibly empty).
pub async fn load_snapshot(source: &dyn RecordSource) -> Snapshot {
    let (trips, vehicles, expenses) = tokio::join!(
        source.fetch_trips(),
        source.fetch_vehicles(),
        source.fetch_expenses()
    );

    let snapshot = Snapshot {
        trips: or_empty(trips, source.name(), "trips"),
        vehicles: or_empty(vehicles, source.name(), "vehicles"),
        expenses: or_empty(expenses, source.name(), "expenses"),
    };

    info!(
        source = source.name(),
        trips = snapshot.trips.len(),
        vehicles = snapshot.vehicles.len(),
        expenses = snapshot.expenses.len(),
        "Snapshot loaded"
    );

    snapshot
}

fn or_empty<T>(result: Result<Vec<T>>, source: &str, collection: &'static str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(
            source,
            collection,
            error = %e,
            "Fetch failed, continuing with an empty collection"
        );
        Vec::new()
    })
}
