//! Dashboard configuration
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path, when given (e.g. `--config`)
//! 2. Override in the data dir (~/.local/share/freightdesk/config/dashboard.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::NOT_INFORMED;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Largest accepted monthly window (ten years)
pub const MAX_MONTHS: u32 = 120;

/// Largest accepted weekly window (about ten years)
pub const MAX_WEEKS: u32 = 520;

/// Window sizes and display defaults for the dashboard pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Calendar months in the monthly series
    pub months: u32,
    /// ISO weeks in the weekly series
    pub weeks: u32,
    /// Entries in the recent-activity feed
    pub recent_limit: usize,
    /// Maximum alerts returned
    pub alert_limit: usize,
    /// Shown when a trip has no driver or vehicle
    pub not_informed: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            months: 6,
            weeks: 8,
            recent_limit: 6,
            alert_limit: 10,
            not_informed: NOT_INFORMED.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Resolve config from an optional explicit path, the data-dir override,
    /// or the embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            return parse_config(&content);
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                let content = fs::read_to_string(&default_path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
                return parse_config(&content);
            }
        }

        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("freightdesk").join("config").join("dashboard.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    series: Option<RawSeries>,
    feed: Option<RawFeed>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    months: Option<u32>,
    weeks: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawFeed {
    recent_limit: Option<usize>,
    alert_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    not_informed: Option<String>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = DashboardConfig::default();

    if let Some(series) = raw.series {
        if let Some(months) = series.months {
            config.months = months;
        }
        if let Some(weeks) = series.weeks {
            config.weeks = weeks;
        }
    }

    if let Some(feed) = raw.feed {
        if let Some(limit) = feed.recent_limit {
            config.recent_limit = limit;
        }
        if let Some(limit) = feed.alert_limit {
            config.alert_limit = limit;
        }
    }

    if let Some(display) = raw.display {
        if let Some(label) = display.not_informed {
            config.not_informed = label;
        }
    }

    if config.months == 0 || config.weeks == 0 {
        return Err(Error::Config(
            "series.months and series.weeks must be at least 1".to_string(),
        ));
    }
    if config.months > MAX_MONTHS {
        return Err(Error::Config(format!(
            "series.months is {}, maximum is {}",
            config.months, MAX_MONTHS
        )));
    }
    if config.weeks > MAX_WEEKS {
        return Err(Error::Config(format!(
            "series.weeks is {}, maximum is {}",
            config.weeks, MAX_WEEKS
        )));
    }

    Ok(config)
}
