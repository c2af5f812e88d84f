//! Core command utilities
//!
//! This module contains:
//! - `open_session` - Load config and the record snapshot
//! - `parse_date` / `resolve_today` - Date argument handling

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use freightdesk_core::{DashboardConfig, DashboardSession, JsonDirSource};
use tracing::warn;

/// Load config, then read the snapshot from the data directory.
///
/// Missing or unreadable record files do not fail the command; the
/// dashboard is simply computed over fewer records.
pub async fn open_session(data_dir: &Path, config_path: Option<&Path>) -> Result<DashboardSession> {
    let config = DashboardConfig::load(config_path).context("Failed to load dashboard config")?;

    let source = JsonDirSource::new(data_dir);
    if !source.dir().is_dir() {
        warn!(
            path = %source.dir().display(),
            "Data directory not found, showing an empty dashboard"
        );
    }

    Ok(DashboardSession::load(&source, config).await)
}

/// Parse a YYYY-MM-DD argument
pub fn parse_date(value: &str, arg: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid {} date format (use YYYY-MM-DD)", arg))
}

/// `--today` override, or the current UTC date
pub fn resolve_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(v) => parse_date(v, "--today"),
        None => Ok(freightdesk_core::dashboard::today()),
    }
}
