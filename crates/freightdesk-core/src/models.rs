//! Domain models for Freightdesk
//!
//! Source records (trips, vehicles, expenses) are owned and persisted by other
//! services; this crate only reads them. The dashboard structures further down
//! are derived fresh on every pipeline run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Display fallback for a missing driver or vehicle reference
pub const NOT_INFORMED: &str = "Not informed";

// ========== Source Records ==========

/// A professional driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
}

/// A client company that contracts freight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// A truck or other vehicle in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub model_year: Option<i32>,
    /// Driver who owns or is assigned to this vehicle
    #[serde(default)]
    pub driver: Option<Driver>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    InProgress,
    Completed,
    Cancelled,
    /// Any status value this version does not recognize
    #[serde(other)]
    Unknown,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable label for tables and feeds
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single freight job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    #[serde(default)]
    pub driver: Option<Driver>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    /// Pickup location
    pub origin: String,
    /// Delivery location
    #[serde(default)]
    pub destination: Option<String>,
    /// Amount billed for the haul
    pub freight_value: f64,
    /// Commission as a percentage (0-100) of the freight value
    #[serde(default)]
    pub commission: Option<f64>,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    pub status: TripStatus,
}

impl Trip {
    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.id.as_str())
    }

    pub fn driver_id(&self) -> Option<&str> {
        self.driver.as_ref().map(|d| d.id.as_str())
    }

    /// UTC calendar date of the start timestamp. Buckets, reports and
    /// [`crate::dashboard::today`] all use this same basis.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// "origin → destination", or just the origin when no destination is set
    pub fn route_label(&self) -> String {
        match self.destination.as_deref() {
            Some(dest) if !dest.trim().is_empty() => format!("{} → {}", self.origin, dest),
            _ => self.origin.clone(),
        }
    }
}

/// An expense incurred on a trip (fuel, tolls, lodging, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Owning trip; expenses without one are ignored by the dashboard
    #[serde(default)]
    pub trip_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: f64,
}

// ========== Dashboard Models ==========

/// Fleet-wide financial totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    /// Trips currently in progress
    pub active_trips: usize,
    /// Trips whose own net profit is negative
    pub loss_trips: usize,
}

/// Time bucket granularity for performance series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Weekly,
}

/// Revenue and cost per time bucket, oldest bucket first.
///
/// The three vectors always have the same length and are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub labels: Vec<String>,
    pub revenues: Vec<f64>,
    pub costs: Vec<f64>,
}

impl PerformanceSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Per-vehicle rollup of its trips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePerformance {
    pub vehicle_id: String,
    pub plate: Option<String>,
    pub brand: String,
    pub trip_count: usize,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    /// Profit over revenue in percent, one decimal place; 0 when revenue is 0
    pub profit_percentage: f64,
}

/// Coarse classification of a vehicle's profit percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 30.0 {
            Self::Excellent
        } else if percentage >= 15.0 {
            Self::Good
        } else if percentage >= 0.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A trip projected for the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTrip {
    pub id: String,
    pub route: String,
    pub driver: String,
    pub vehicle: String,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub status: TripStatus,
    pub start: DateTime<Utc>,
}

/// Everything the dashboard screen shows, computed from one trip snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub financial_summary: FinancialSummary,
    pub monthly_performance: PerformanceSeries,
    pub weekly_performance: PerformanceSeries,
    pub vehicle_performance: Vec<VehiclePerformance>,
    pub recent_trips: Vec<RecentTrip>,
}

// ========== Alert Models ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Trip cost exceeds its freight value
    LossTrip,
    /// Trip is running with no freight value billed
    UnbilledTrip,
}

/// An item that needs the fleet manager's attention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub trip_id: Option<String>,
    pub vehicle_id: Option<String>,
}

// ========== Filter Models ==========

/// Choices available to the dashboard filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub vehicles: Vec<Vehicle>,
    /// Distinct drivers referenced by trips, sorted by name
    pub drivers: Vec<Driver>,
}

// ========== Report Models ==========

/// Date range covered by a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// `None` when the range is open at the start
    pub from: Option<String>,
    pub to: String,
}

/// One trip line in the period report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReportRow {
    pub trip_id: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub status: TripStatus,
    pub driver: Option<String>,
    pub company: Option<String>,
    pub vehicle_brand: Option<String>,
    pub vehicle_plate: Option<String>,
    pub origin: String,
    pub destination: Option<String>,
    /// Same label as the recent-activity feed
    pub route: String,
    pub freight_value: f64,
    /// Commission in currency, not percent
    pub commission_value: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// Column totals for the period report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub freight_value: f64,
    pub commission_value: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// Trips started within a date range, with totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: ReportPeriod,
    pub rows: Vec<TripReportRow>,
    pub totals: ReportTotals,
}
