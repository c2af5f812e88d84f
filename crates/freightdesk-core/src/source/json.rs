//! JSON directory record source
//!
//! Reads three JSON arrays from one directory:
//! `trips.json`, `vehicles.json` and `expenses.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::RecordSource;
use crate::error::{Error, Result};
use crate::models::{Expense, Trip, Vehicle};

pub const TRIPS_FILE: &str = "trips.json";
pub const VEHICLES_FILE: &str = "vehicles.json";
pub const EXPENSES_FILE: &str = "expenses.json";

/// Record source backed by JSON files in a directory
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::Source(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let records: Vec<T> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = records.len(), "Read collection");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for JsonDirSource {
    fn name(&self) -> &str {
        "json"
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>> {
        self.read_collection(TRIPS_FILE).await
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.read_collection(VEHICLES_FILE).await
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>> {
        self.read_collection(EXPENSES_FILE).await
    }
}
