//! Test utilities: record builders and an in-memory record source
//!
//! Available in unit tests and, with the `test-utils` feature, to other crates.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::models::{Company, Driver, Expense, Trip, TripStatus, Vehicle};
use crate::source::RecordSource;

/// Noon UTC on a `YYYY-MM-DD` date
pub fn at(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date {}: {}", date, e))
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

/// A completed trip from São Paulo with no driver, company or vehicle
pub fn trip(id: &str, freight_value: f64, commission: Option<f64>, start: &str) -> Trip {
    Trip {
        id: id.to_string(),
        driver: None,
        company: None,
        vehicle: None,
        origin: "São Paulo".to_string(),
        destination: None,
        freight_value,
        commission,
        start: at(start),
        end: None,
        status: TripStatus::Completed,
    }
}

pub fn vehicle(id: &str, brand: &str, plate: Option<&str>) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: brand.to_string(),
        plate: plate.map(str::to_string),
        model_year: None,
        driver: None,
        active: true,
    }
}

pub fn driver(id: &str, name: &str) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn company(id: &str, name: &str) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn expense(id: &str, trip_id: Option<&str>, value: f64) -> Expense {
    Expense {
        id: id.to_string(),
        trip_id: trip_id.map(str::to_string),
        name: None,
        description: None,
        value,
    }
}

/// Which collection a [`MemorySource`] should fail to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Trips,
    Vehicles,
    Expenses,
}

/// In-memory record source with per-collection failure injection
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    trips: Vec<Trip>,
    vehicles: Vec<Vehicle>,
    expenses: Vec<Expense>,
    failing: Vec<Collection>,
}

impl MemorySource {
    pub fn new(trips: Vec<Trip>, vehicles: Vec<Vehicle>, expenses: Vec<Expense>) -> Self {
        Self {
            trips,
            vehicles,
            expenses,
            failing: Vec::new(),
        }
    }

    /// Make fetches of `collection` return an error
    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.push(collection);
        self
    }

    fn check(&self, collection: Collection) -> Result<()> {
        if self.failing.contains(&collection) {
            Err(Error::Source(format!("{:?} unavailable", collection)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        self.check(Collection::Trips)?;
        Ok(self.trips.clone())
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.check(Collection::Vehicles)?;
        Ok(self.vehicles.clone())
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>> {
        self.check(Collection::Expenses)?;
        Ok(self.expenses.clone())
    }
}
