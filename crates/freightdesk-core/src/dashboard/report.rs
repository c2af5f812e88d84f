//! Trip report for a date range

use chrono::NaiveDate;

use crate::models::{PeriodReport, ReportPeriod, ReportTotals, Trip, TripReportRow};

use super::cost::{commission_value, trip_profit, ExpenseIndex};

/// Trips whose start date falls in `[from, to]` (inclusive), oldest first,
/// with a totals line. A `from` of `None` takes every trip up to `to`.
pub fn build_period_report(
    trips: &[Trip],
    expenses: &ExpenseIndex,
    from: Option<NaiveDate>,
    to: NaiveDate,
) -> PeriodReport {
    let mut selected: Vec<&Trip> = trips
        .iter()
        .filter(|t| {
            let start = t.start_date();
            from.map_or(true, |from| start >= from) && start <= to
        })
        .collect();
    selected.sort_by(|a, b| a.start.cmp(&b.start));

    let rows: Vec<TripReportRow> = selected
        .into_iter()
        .map(|trip| TripReportRow {
            trip_id: trip.id.clone(),
            start: trip.start_date(),
            end: trip.end.map(|e| e.date_naive()),
            status: trip.status,
            driver: trip.driver.as_ref().map(|d| d.name.clone()),
            company: trip.company.as_ref().map(|c| c.name.clone()),
            vehicle_brand: trip.vehicle.as_ref().map(|v| v.brand.clone()),
            vehicle_plate: trip.vehicle.as_ref().and_then(|v| v.plate.clone()),
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            route: trip.route_label(),
            freight_value: trip.freight_value,
            commission_value: commission_value(trip),
            expenses: expenses.total_for(&trip.id),
            net_profit: trip_profit(trip, expenses),
        })
        .collect();

    let totals = rows.iter().fold(ReportTotals::default(), |mut acc, row| {
        acc.freight_value += row.freight_value;
        acc.commission_value += row.commission_value;
        acc.expenses += row.expenses;
        acc.net_profit += row.net_profit;
        acc
    });

    PeriodReport {
        period: ReportPeriod {
            from: from.map(|d| d.to_string()),
            to: to.to_string(),
        },
        rows,
        totals,
    }
}
