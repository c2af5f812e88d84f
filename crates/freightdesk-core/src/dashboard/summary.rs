//! Fleet-wide financial summary

use crate::models::{FinancialSummary, Trip, TripStatus};

use super::cost::{trip_cost, ExpenseIndex};

/// Aggregate revenue, cost and profit over a trip set.
///
/// Empty input yields an all-zero summary.
pub fn build_financial_summary(trips: &[Trip], expenses: &ExpenseIndex) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for trip in trips {
        let cost = trip_cost(trip, expenses);
        summary.total_revenue += trip.freight_value;
        summary.total_cost += cost;

        if trip.status == TripStatus::InProgress {
            summary.active_trips += 1;
        }
        if trip.freight_value - cost < 0.0 {
            summary.loss_trips += 1;
        }
    }

    summary.net_profit = summary.total_revenue - summary.total_cost;
    summary
}
