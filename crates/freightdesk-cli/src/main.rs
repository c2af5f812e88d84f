//! Freightdesk CLI - Fleet financial dashboard
//!
//! Usage:
//!   freightdesk dashboard                 Summary, series, vehicles, recent trips
//!   freightdesk dashboard --vehicle ID    Same, restricted to one vehicle
//!   freightdesk vehicles                  Vehicles ranked by profit
//!   freightdesk report --period last-month

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let session = commands::open_session(&cli.data, cli.config.as_deref()).await?;

    match cli.command {
        Commands::Dashboard {
            filter,
            today,
            json,
        } => {
            let today = commands::resolve_today(today.as_deref())?;
            commands::cmd_dashboard(&session, &filter.into_filter(), today, json)
        }
        Commands::Vehicles { filter, json } => {
            commands::cmd_vehicles(&session, &filter.into_filter(), json)
        }
        Commands::Alerts { filter, json } => {
            commands::cmd_alerts(&session, &filter.into_filter(), json)
        }
        Commands::Filters => commands::cmd_filters(&session),
        Commands::Report {
            filter,
            period,
            from,
            to,
            today,
            json,
        } => {
            let today = commands::resolve_today(today.as_deref())?;
            let (from_date, to_date) =
                commands::resolve_period(&period, from.as_deref(), to.as_deref(), today)?;
            commands::cmd_report(&session, &filter.into_filter(), from_date, to_date, json)
        }
    }
}
