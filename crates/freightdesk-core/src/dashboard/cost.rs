//! Per-trip cost resolution
//!
//! Every revenue/cost/profit figure on the dashboard goes through [`trip_cost`],
//! so the summary, series and vehicle rankings always agree with each other.

use std::collections::HashMap;

use crate::models::{Expense, Trip};

/// Summed expense value per trip id.
///
/// Built once per raw load and read-only afterwards. Expenses without a trip
/// id are skipped; expenses pointing at an unknown trip are kept but never
/// looked up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseIndex {
    totals: HashMap<String, f64>,
}

impl ExpenseIndex {
    pub fn build(expenses: &[Expense]) -> Self {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in expenses {
            if let Some(trip_id) = expense.trip_id.as_deref() {
                *totals.entry(trip_id.to_string()).or_insert(0.0) += expense.value;
            }
        }
        Self { totals }
    }

    /// Total expenses recorded against a trip (0 when there are none)
    pub fn total_for(&self, trip_id: &str) -> f64 {
        self.totals.get(trip_id).copied().unwrap_or(0.0)
    }

    /// Number of distinct trips with at least one expense
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Commission owed on a trip, in currency
pub fn commission_value(trip: &Trip) -> f64 {
    trip.freight_value * (trip.commission.unwrap_or(0.0) / 100.0)
}

/// Commission plus every expense linked to the trip
pub fn trip_cost(trip: &Trip, expenses: &ExpenseIndex) -> f64 {
    commission_value(trip) + expenses.total_for(&trip.id)
}

/// Freight value minus [`trip_cost`]
pub fn trip_profit(trip: &Trip, expenses: &ExpenseIndex) -> f64 {
    trip.freight_value - trip_cost(trip, expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{expense, trip};

    #[test]
    fn test_cost_is_commission_when_no_expenses() {
        let index = ExpenseIndex::default();
        let t = trip("t1", 1000.0, Some(10.0), "2024-03-05");

        assert_eq!(trip_cost(&t, &index), 100.0);
        assert_eq!(trip_profit(&t, &index), 900.0);
    }

    #[test]
    fn test_missing_commission_counts_as_zero() {
        let index = ExpenseIndex::default();
        let t = trip("t1", 500.0, None, "2024-03-20");

        assert_eq!(commission_value(&t), 0.0);
        assert_eq!(trip_cost(&t, &index), 0.0);
    }

    #[test]
    fn test_expenses_summed_per_trip() {
        let index = ExpenseIndex::build(&[
            expense("e1", Some("t1"), 150.0),
            expense("e2", Some("t1"), 50.0),
            expense("e3", Some("t2"), 30.0),
            expense("e4", None, 999.0),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.total_for("t1"), 200.0);
        assert_eq!(index.total_for("t2"), 30.0);
        assert_eq!(index.total_for("missing"), 0.0);

        let t = trip("t1", 1000.0, Some(10.0), "2024-03-05");
        assert_eq!(trip_cost(&t, &index), 300.0);
    }

    #[test]
    fn test_cost_never_negative_for_non_negative_inputs() {
        let index = ExpenseIndex::build(&[expense("e1", Some("t3"), 0.0)]);
        for (freight, commission) in [(0.0, Some(0.0)), (10.0, None), (250.0, Some(100.0))] {
            let t = trip("t3", freight, commission, "2024-01-01");
            assert!(trip_cost(&t, &index) >= 0.0);
        }
    }

    #[test]
    fn test_loss_when_expenses_exceed_freight() {
        let index = ExpenseIndex::build(&[expense("e1", Some("t1"), 800.0)]);
        let t = trip("t1", 1000.0, Some(30.0), "2024-01-01");

        assert_eq!(trip_profit(&t, &index), -100.0);
    }
}
