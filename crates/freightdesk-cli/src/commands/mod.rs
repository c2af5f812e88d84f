//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_session, date parsing)
//! - `dashboard` - Dashboard, vehicle ranking, alerts and filter options
//! - `reports` - Date-range trip report

pub mod core;
pub mod dashboard;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use dashboard::*;
pub use reports::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
