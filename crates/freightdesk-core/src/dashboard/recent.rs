//! Recent-activity feed

use crate::models::{RecentTrip, Trip};

use super::cost::{trip_cost, ExpenseIndex};

/// The `limit` most recently started trips, newest first.
///
/// Trips with identical start times keep their input order. Missing driver
/// or vehicle references are shown as `not_informed`.
pub fn build_recent_trips(
    trips: &[Trip],
    expenses: &ExpenseIndex,
    limit: usize,
    not_informed: &str,
) -> Vec<RecentTrip> {
    let mut sorted: Vec<&Trip> = trips.iter().collect();
    sorted.sort_by(|a, b| b.start.cmp(&a.start));

    sorted
        .into_iter()
        .take(limit)
        .map(|trip| {
            let cost = trip_cost(trip, expenses);
            RecentTrip {
                id: trip.id.clone(),
                route: trip.route_label(),
                driver: trip
                    .driver
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| not_informed.to_string()),
                vehicle: trip
                    .vehicle
                    .as_ref()
                    .map(|v| v.brand.clone())
                    .unwrap_or_else(|| not_informed.to_string()),
                revenue: trip.freight_value,
                cost,
                profit: trip.freight_value - cost,
                status: trip.status,
                start: trip.start,
            }
        })
        .collect()
}
