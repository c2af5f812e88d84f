//! Dashboard command implementations

use anyhow::Result;
use chrono::NaiveDate;
use freightdesk_core::models::{AlertKind, PerformanceSeries};
use freightdesk_core::{DashboardFilter, DashboardSession};

use super::{print_json, truncate};

fn print_filter(filter: &DashboardFilter) {
    if !filter.is_active() {
        println!("   All vehicles and drivers");
        return;
    }
    if let Some(id) = &filter.vehicle_id {
        println!("   Vehicle filter: {}", id);
    }
    if let Some(id) = &filter.driver_id {
        println!("   Driver filter:  {}", id);
    }
}

fn print_series(title: &str, series: &PerformanceSeries) {
    println!("  {}", title);
    println!("   {:13} │ {:>12} │ {:>12} │ {:>12}", "Period", "Revenue", "Cost", "Profit");
    println!("   ──────────────┼──────────────┼──────────────┼──────────────");
    for ((label, revenue), cost) in series
        .labels
        .iter()
        .zip(&series.revenues)
        .zip(&series.costs)
    {
        println!(
            "   {:13} │ {:>12.2} │ {:>12.2} │ {:>12.2}",
            label,
            revenue,
            cost,
            revenue - cost
        );
    }
    println!();
}

pub fn cmd_dashboard(
    session: &DashboardSession,
    filter: &DashboardFilter,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let data = session.dashboard(filter, today);

    if json {
        return print_json(&data);
    }

    let summary = &data.financial_summary;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         🚚 Freightdesk Dashboard        │");
    println!("╰─────────────────────────────────────────╯");
    print_filter(filter);
    println!();

    if session.is_empty() {
        println!("  No trips found. Add trips.json to the data directory.");
        println!();
    }

    println!("  Revenue:         {:.2}", summary.total_revenue);
    println!("  Costs:           {:.2}", summary.total_cost);
    println!("  Net Profit:      {:.2}", summary.net_profit);
    println!("  Active Trips:    {}", summary.active_trips);
    if summary.loss_trips > 0 {
        println!("  ⚠️  Loss Trips:    {}", summary.loss_trips);
    }
    println!();

    print_series("📊 Monthly Performance", &data.monthly_performance);
    print_series("📅 Weekly Performance", &data.weekly_performance);

    if !data.vehicle_performance.is_empty() {
        println!("  🚛 Vehicles");
        for row in &data.vehicle_performance {
            println!(
                "   {:20} │ {:>3} trips │ {:>12.2} │ {:>6.1}%",
                truncate(
                    &format!("{} {}", row.brand, row.plate.as_deref().unwrap_or("—")),
                    20
                ),
                row.trip_count,
                row.profit,
                row.profit_percentage
            );
        }
        println!();
    }

    if !data.recent_trips.is_empty() {
        println!("  🕑 Recent Trips");
        for trip in &data.recent_trips {
            println!(
                "   {} │ {:28} │ {:15} │ {:12} │ {:>12.2}",
                trip.start.format("%Y-%m-%d"),
                truncate(&trip.route, 28),
                truncate(&trip.driver, 15),
                trip.status.label(),
                trip.profit
            );
        }
        println!();
    }

    Ok(())
}

pub fn cmd_vehicles(session: &DashboardSession, filter: &DashboardFilter, json: bool) -> Result<()> {
    let ranking = session.vehicle_ranking(filter);

    if json {
        return print_json(&ranking);
    }

    println!();
    println!("🚛 Vehicle Performance");
    print_filter(filter);
    println!("   ─────────────────────────────────────────────────────────────");

    if ranking.is_empty() {
        println!("   No vehicles with trips.");
        return Ok(());
    }

    println!(
        "   {:12} │ {:10} │ {:>5} │ {:>12} │ {:>12} │ {:>7} │ {:9}",
        "Brand", "Plate", "Trips", "Revenue", "Profit", "Margin", "Tier"
    );
    println!("   ─────────────┼────────────┼───────┼──────────────┼──────────────┼─────────┼──────────");
    for row in &ranking {
        println!(
            "   {:12} │ {:10} │ {:>5} │ {:>12.2} │ {:>12.2} │ {:>6.1}% │ {:9}",
            truncate(&row.brand, 12),
            truncate(row.plate.as_deref().unwrap_or("—"), 10),
            row.trip_count,
            row.revenue,
            row.profit,
            row.profit_percentage,
            row.tier()
        );
    }

    Ok(())
}

pub fn cmd_alerts(session: &DashboardSession, filter: &DashboardFilter, json: bool) -> Result<()> {
    let alerts = session.alerts(filter);

    if json {
        return print_json(&alerts);
    }

    if alerts.is_empty() {
        println!("✅ No alerts. Every trip is billed and profitable.");
        return Ok(());
    }

    println!();
    println!("⚠️  Alerts ({})", alerts.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for alert in &alerts {
        let icon = match alert.kind {
            AlertKind::LossTrip => "🔴",
            AlertKind::UnbilledTrip => "🟠",
        };
        println!("   {} {}", icon, alert.title);
        println!("      {}", alert.description);
    }

    Ok(())
}

pub fn cmd_filters(session: &DashboardSession) -> Result<()> {
    let options = session.filter_options();

    println!();
    println!("🚛 Vehicles (--vehicle)");
    if options.vehicles.is_empty() {
        println!("   none");
    }
    for vehicle in &options.vehicles {
        let inactive = if vehicle.active { "" } else { " (inactive)" };
        println!(
            "   {:38} {} {}{}",
            vehicle.id,
            vehicle.brand,
            vehicle.plate.as_deref().unwrap_or(""),
            inactive
        );
    }

    println!();
    println!("👤 Drivers (--driver)");
    if options.drivers.is_empty() {
        println!("   none");
    }
    for driver in &options.drivers {
        println!("   {:38} {}", driver.id, driver.name);
    }

    Ok(())
}
