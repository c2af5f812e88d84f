//! Dashboard aggregation engine
//!
//! Turns a trip/vehicle/expense snapshot into the dashboard structures:
//! - `cost` - per-trip cost resolution and the expense index
//! - `summary` - fleet-wide financial totals
//! - `calendar` - month and ISO-week buckets
//! - `series` - revenue/cost per bucket
//! - `vehicles` - per-vehicle rollups and ranking
//! - `recent` - recent-activity feed
//! - `filter` - vehicle/driver filters and their options
//! - `alerts` - loss and unbilled-trip alerts
//! - `report` - date-range trip report
//!
//! Every builder is a pure function of its inputs. [`DashboardSession`] keeps
//! one loaded snapshot plus its expense index so filter changes can re-run the
//! pipeline without reloading anything.

pub mod alerts;
pub mod calendar;
pub mod cost;
pub mod filter;
pub mod recent;
pub mod report;
pub mod series;
pub mod summary;
pub mod vehicles;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::{
    Alert, DashboardData, FilterOptions, Granularity, PeriodReport, Trip, Vehicle,
    VehiclePerformance,
};
use crate::source::{load_snapshot, RecordSource, Snapshot};

pub use alerts::build_alerts;
pub use cost::{commission_value, trip_cost, trip_profit, ExpenseIndex};
pub use filter::{filter_options, DashboardFilter};
pub use recent::build_recent_trips;
pub use report::build_period_report;
pub use series::{build_performance, build_series};
pub use summary::build_financial_summary;
pub use vehicles::{build_vehicle_performance, profit_percentage, rank_by_profit};

/// Current UTC date, used as the end of the series windows.
///
/// Trips are bucketed by [`Trip::start_date`], which is also a UTC date, so
/// a trip started late in the evening west of Greenwich still lands in the
/// window ending today.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Run the full pipeline over one trip set
pub fn build_dashboard(
    trips: &[Trip],
    vehicles: &[Vehicle],
    expenses: &ExpenseIndex,
    today: NaiveDate,
    config: &DashboardConfig,
) -> DashboardData {
    debug!(
        trips = trips.len(),
        vehicles = vehicles.len(),
        expense_trips = expenses.len(),
        "Building dashboard"
    );

    DashboardData {
        financial_summary: build_financial_summary(trips, expenses),
        monthly_performance: build_performance(
            trips,
            expenses,
            Granularity::Monthly,
            today,
            config.months,
        ),
        weekly_performance: build_performance(
            trips,
            expenses,
            Granularity::Weekly,
            today,
            config.weeks,
        ),
        vehicle_performance: build_vehicle_performance(trips, vehicles, expenses),
        recent_trips: build_recent_trips(
            trips,
            expenses,
            config.recent_limit,
            &config.not_informed,
        ),
    }
}

/// One loaded snapshot and the expense index derived from it.
///
/// The index is built once in [`DashboardSession::new`] and never modified;
/// every filtered recomputation reads it.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    snapshot: Snapshot,
    expenses: ExpenseIndex,
    config: DashboardConfig,
}

impl DashboardSession {
    pub fn new(snapshot: Snapshot, config: DashboardConfig) -> Self {
        let expenses = ExpenseIndex::build(&snapshot.expenses);
        Self {
            snapshot,
            expenses,
            config,
        }
    }

    /// Load a snapshot from a record source and index it.
    ///
    /// Never fails: a collection that cannot be fetched is treated as empty.
    pub async fn load(source: &dyn RecordSource, config: DashboardConfig) -> Self {
        Self::new(load_snapshot(source).await, config)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn expense_index(&self) -> &ExpenseIndex {
        &self.expenses
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// True when no trips were loaded
    pub fn is_empty(&self) -> bool {
        self.snapshot.trips.is_empty()
    }

    fn filtered_trips(&self, filter: &DashboardFilter) -> Vec<Trip> {
        filter.apply(&self.snapshot.trips)
    }

    /// Dashboard for the trips matching `filter`
    pub fn dashboard(&self, filter: &DashboardFilter, today: NaiveDate) -> DashboardData {
        let trips = self.filtered_trips(filter);
        build_dashboard(
            &trips,
            &self.snapshot.vehicles,
            &self.expenses,
            today,
            &self.config,
        )
    }

    /// Vehicle rollups for the filtered trips, highest profit first
    pub fn vehicle_ranking(&self, filter: &DashboardFilter) -> Vec<VehiclePerformance> {
        let trips = self.filtered_trips(filter);
        rank_by_profit(build_vehicle_performance(
            &trips,
            &self.snapshot.vehicles,
            &self.expenses,
        ))
    }

    pub fn alerts(&self, filter: &DashboardFilter) -> Vec<Alert> {
        let trips = self.filtered_trips(filter);
        build_alerts(&trips, &self.expenses, self.config.alert_limit)
    }

    /// Options for the filters, always from the unfiltered snapshot
    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.snapshot.trips, &self.snapshot.vehicles)
    }

    /// Report over `[from, to]`; `from: None` means no lower bound
    pub fn period_report(
        &self,
        filter: &DashboardFilter,
        from: Option<NaiveDate>,
        to: NaiveDate,
    ) -> PeriodReport {
        let trips = self.filtered_trips(filter);
        build_period_report(&trips, &self.expenses, from, to)
    }
}
