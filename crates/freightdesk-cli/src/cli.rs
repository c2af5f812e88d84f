//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use freightdesk_core::DashboardFilter;

/// Freightdesk - Fleet financial dashboard
#[derive(Parser)]
#[command(name = "freightdesk")]
#[command(about = "Financial dashboard for trucking fleets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing trips.json, vehicles.json and expenses.json
    #[arg(long, default_value = "data", global = true)]
    pub data: PathBuf,

    /// Dashboard config file (defaults to the data-dir override or built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Restrict the trips considered
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only trips made with this vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Only trips driven by this driver id
    #[arg(long)]
    pub driver: Option<String>,
}

impl FilterArgs {
    pub fn into_filter(self) -> DashboardFilter {
        DashboardFilter::new(self.vehicle, self.driver)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard: summary, monthly/weekly series, vehicles, recent trips
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Treat this date (YYYY-MM-DD) as today for the series windows
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Rank vehicles by profit
    Vehicles {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show trips that need attention (losses, missing freight value)
    Alerts {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// List the vehicles and drivers available as filters
    Filters,

    /// Trip report for a date range
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        /// Period: this-month, last-month, this-year, last-30-days, last-90-days, all
        #[arg(short, long, default_value = "this-month")]
        period: String,

        /// Custom start date (YYYY-MM-DD), requires --to
        #[arg(long)]
        from: Option<String>,

        /// Custom end date (YYYY-MM-DD), requires --from
        #[arg(long)]
        to: Option<String>,

        /// Treat this date (YYYY-MM-DD) as today when resolving --period
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
