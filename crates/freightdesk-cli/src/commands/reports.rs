//! Report command implementations

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};
use freightdesk_core::{DashboardFilter, DashboardSession};

use super::{parse_date, print_json, truncate};

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Resolve a period string (or explicit --from/--to) to (from_date, to_date).
///
/// `all` has no start date.
pub fn resolve_period(
    period: &str,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
    today: NaiveDate,
) -> Result<(Option<NaiveDate>, NaiveDate)> {
    match (custom_from, custom_to) {
        (Some(from), Some(to)) => {
            let from_date = parse_date(from, "--from")?;
            let to_date = parse_date(to, "--to")?;
            if from_date > to_date {
                anyhow::bail!("--from ({}) is after --to ({})", from_date, to_date);
            }
            return Ok((Some(from_date), to_date));
        }
        (Some(_), None) | (None, Some(_)) => {
            anyhow::bail!("--from and --to must be given together");
        }
        (None, None) => {}
    }

    match period.to_lowercase().as_str() {
        "this-month" => Ok((Some(first_of_month(today)), today)),
        "last-month" => {
            let last_day = first_of_month(today) - Days::new(1);
            Ok((Some(first_of_month(last_day)), last_day))
        }
        "this-year" => {
            let from = today
                .with_ordinal(1)
                .context("Failed to compute start of year")?;
            Ok((Some(from), today))
        }
        "last-30-days" => Ok((Some(today - Days::new(30)), today)),
        "last-90-days" => Ok((Some(today - Days::new(90)), today)),
        "all" => Ok((None, today)),
        _ => anyhow::bail!(
            "Unknown period: {}. Available: this-month, last-month, this-year, last-30-days, last-90-days, all",
            period
        ),
    }
}

pub fn cmd_report(
    session: &DashboardSession,
    filter: &DashboardFilter,
    from: Option<NaiveDate>,
    to: NaiveDate,
    json: bool,
) -> Result<()> {
    let report = session.period_report(filter, from, to);

    if json {
        return print_json(&report);
    }

    println!();
    println!("📋 Trip Report");
    match &report.period.from {
        Some(from) => println!("   Period: {} to {}", from, report.period.to),
        None => println!("   Period: all trips up to {}", report.period.to),
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if report.rows.is_empty() {
        println!("   No trips found in this period.");
        return Ok(());
    }

    println!(
        "   {:10} │ {:12} │ {:15} │ {:24} │ {:>11} │ {:>10} │ {:>10} │ {:>11}",
        "Start", "Status", "Driver", "Route", "Freight", "Commission", "Expenses", "Net Profit"
    );
    println!("   ───────────┼──────────────┼─────────────────┼──────────────────────────┼─────────────┼────────────┼────────────┼────────────");

    for row in &report.rows {
        println!(
            "   {:10} │ {:12} │ {:15} │ {:24} │ {:>11.2} │ {:>10.2} │ {:>10.2} │ {:>11.2}",
            row.start,
            row.status.label(),
            truncate(row.driver.as_deref().unwrap_or("—"), 15),
            truncate(&row.route, 24),
            row.freight_value,
            row.commission_value,
            row.expenses,
            row.net_profit
        );
    }

    let totals = &report.totals;
    println!("   ───────────┴──────────────┴─────────────────┴──────────────────────────┼─────────────┼────────────┼────────────┼────────────");
    println!(
        "   {:>71} │ {:>11.2} │ {:>10.2} │ {:>10.2} │ {:>11.2}",
        "Totals", totals.freight_value, totals.commission_value, totals.expenses, totals.net_profit
    );

    Ok(())
}
