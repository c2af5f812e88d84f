//! Revenue/cost performance series over recent time windows

use chrono::NaiveDate;

use crate::models::{Granularity, PerformanceSeries, Trip};

use super::calendar::{buckets, TimeBucket};
use super::cost::{trip_cost, ExpenseIndex};

/// Sum revenue and cost of the trips that fall into each bucket.
///
/// Trips outside every bucket are ignored here (they still count in the
/// financial summary).
pub fn build_series(
    trips: &[Trip],
    expenses: &ExpenseIndex,
    buckets: &[TimeBucket],
) -> PerformanceSeries {
    let mut series = PerformanceSeries {
        labels: Vec::with_capacity(buckets.len()),
        revenues: Vec::with_capacity(buckets.len()),
        costs: Vec::with_capacity(buckets.len()),
    };

    for bucket in buckets {
        let (revenue, cost) = trips
            .iter()
            .filter(|trip| bucket.key.contains(trip.start_date()))
            .fold((0.0, 0.0), |(revenue, cost), trip| {
                (
                    revenue + trip.freight_value,
                    cost + trip_cost(trip, expenses),
                )
            });

        series.labels.push(bucket.label.clone());
        series.revenues.push(revenue);
        series.costs.push(cost);
    }

    series
}

/// Series over the last `count` months or ISO weeks ending at `today`
pub fn build_performance(
    trips: &[Trip],
    expenses: &ExpenseIndex,
    granularity: Granularity,
    today: NaiveDate,
    count: u32,
) -> PerformanceSeries {
    build_series(trips, expenses, &buckets(granularity, today, count))
}
