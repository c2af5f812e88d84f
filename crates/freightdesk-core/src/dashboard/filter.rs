//! Dashboard filters (by vehicle and/or driver) and their option lists

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Driver, FilterOptions, Trip, Vehicle};

/// Restricts the trip set before the pipeline runs.
///
/// Both criteria are optional and combine with AND. The default filter
/// matches every trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilter {
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
}

impl DashboardFilter {
    pub fn new(vehicle_id: Option<String>, driver_id: Option<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.filter(|id| !id.trim().is_empty()),
            driver_id: driver_id.filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.vehicle_id.is_some() || self.driver_id.is_some()
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        let vehicle_ok = match self.vehicle_id.as_deref() {
            Some(id) => trip.vehicle_id() == Some(id),
            None => true,
        };
        let driver_ok = match self.driver_id.as_deref() {
            Some(id) => trip.driver_id() == Some(id),
            None => true,
        };
        vehicle_ok && driver_ok
    }

    /// Trips matching the filter, in input order
    pub fn apply(&self, trips: &[Trip]) -> Vec<Trip> {
        trips.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Case- and accent-insensitive ordering key for person names
fn name_sort_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Vehicle choices are every loaded vehicle; driver choices are the distinct
/// drivers referenced by trips, sorted by name.
pub fn filter_options(trips: &[Trip], vehicles: &[Vehicle]) -> FilterOptions {
    let mut drivers: HashMap<&str, &Driver> = HashMap::new();
    for driver in trips.iter().filter_map(|t| t.driver.as_ref()) {
        drivers.insert(driver.id.as_str(), driver);
    }

    let mut drivers: Vec<Driver> = drivers.into_values().cloned().collect();
    drivers.sort_by_cached_key(|d| (name_sort_key(&d.name), d.name.clone(), d.id.clone()));

    FilterOptions {
        vehicles: vehicles.to_vec(),
        drivers,
    }
}
