//! Freightdesk Core Library
//!
//! Dashboard aggregation for a trucking back-office:
//! - Trip, vehicle and expense records
//! - Per-trip cost resolution (commission + expenses)
//! - Financial summary, monthly and ISO-week performance series
//! - Per-vehicle rankings and the recent-activity feed
//! - Filters, alerts and date-range trip reports
//! - Record sources that tolerate partial failures

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod source;

/// Test utilities including an in-memory record source
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::DashboardConfig;
pub use dashboard::{build_dashboard, DashboardFilter, DashboardSession, ExpenseIndex};
pub use error::{Error, Result};
pub use source::{load_snapshot, JsonDirSource, RecordSource, Snapshot};
