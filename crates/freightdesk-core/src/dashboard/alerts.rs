//! Dashboard alerts derived from trip economics

use crate::models::{Alert, AlertKind, Trip, TripStatus};

use super::cost::{trip_profit, ExpenseIndex};

/// Collect alerts in trip order, capped at `limit`.
///
/// - a trip whose profit is negative raises [`AlertKind::LossTrip`]
/// - an in-progress trip with no freight value raises [`AlertKind::UnbilledTrip`]
pub fn build_alerts(trips: &[Trip], expenses: &ExpenseIndex, limit: usize) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for trip in trips {
        let profit = trip_profit(trip, expenses);
        if profit < 0.0 {
            alerts.push(Alert {
                id: format!("loss-{}", trip.id),
                kind: AlertKind::LossTrip,
                title: "Trip running at a loss".to_string(),
                description: format!("{} - loss of {:.2}", trip.route_label(), profit.abs()),
                trip_id: Some(trip.id.clone()),
                vehicle_id: trip.vehicle_id().map(str::to_string),
            });
        }

        if trip.freight_value == 0.0 && trip.status == TripStatus::InProgress {
            alerts.push(Alert {
                id: format!("unbilled-{}", trip.id),
                kind: AlertKind::UnbilledTrip,
                title: "Trip without freight value".to_string(),
                description: format!("{} - freight value not recorded", trip.route_label()),
                trip_id: Some(trip.id.clone()),
                vehicle_id: trip.vehicle_id().map(str::to_string),
            });
        }
    }

    alerts.truncate(limit);
    alerts
}
