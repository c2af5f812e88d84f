//! Per-vehicle performance rollups

use crate::models::{PerformanceTier, Trip, Vehicle, VehiclePerformance};

use super::cost::{trip_cost, ExpenseIndex};

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Profit as a percentage of revenue, one decimal place. Zero revenue gives 0.
pub fn profit_percentage(profit: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        round1(profit / revenue * 100.0)
    } else {
        0.0
    }
}

/// Join trips to vehicles and roll up each vehicle's trips.
///
/// Vehicles with no matching trips are left out. Output follows the order of
/// `vehicles`; see [`rank_by_profit`] for a sorted view.
pub fn build_vehicle_performance(
    trips: &[Trip],
    vehicles: &[Vehicle],
    expenses: &ExpenseIndex,
) -> Vec<VehiclePerformance> {
    vehicles
        .iter()
        .filter_map(|vehicle| {
            let mut trip_count = 0;
            let mut revenue = 0.0;
            let mut cost = 0.0;

            for trip in trips
                .iter()
                .filter(|t| t.vehicle_id() == Some(vehicle.id.as_str()))
            {
                trip_count += 1;
                revenue += trip.freight_value;
                cost += trip_cost(trip, expenses);
            }

            if trip_count == 0 {
                return None;
            }

            let profit = revenue - cost;
            Some(VehiclePerformance {
                vehicle_id: vehicle.id.clone(),
                plate: vehicle.plate.clone(),
                brand: vehicle.brand.clone(),
                trip_count,
                revenue,
                cost,
                profit,
                profit_percentage: profit_percentage(profit, revenue),
            })
        })
        .collect()
}

/// Sort rows by profit, highest first
pub fn rank_by_profit(mut rows: Vec<VehiclePerformance>) -> Vec<VehiclePerformance> {
    rows.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    rows
}

impl VehiclePerformance {
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percentage(self.profit_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{expense, trip, vehicle};

    #[test]
    fn test_rollup_and_skip_idle_vehicles() {
        let truck = vehicle("v1", "Volvo", Some("ABC-1234"));
        let van = vehicle("v2", "Iveco", None);
        let idle = vehicle("v3", "Scania", Some("IDL-0000"));

        let mut a = trip("t1", 1000.0, Some(10.0), "2024-03-05");
        a.vehicle = Some(truck.clone());
        let mut b = trip("t2", 500.0, None, "2024-03-06");
        b.vehicle = Some(truck.clone());
        let mut c = trip("t3", 200.0, None, "2024-03-07");
        c.vehicle = Some(van.clone());
        let unassigned = trip("t4", 50.0, None, "2024-03-08");

        let index = ExpenseIndex::build(&[expense("e1", Some("t3"), 250.0)]);
        let rows = build_vehicle_performance(&[a, b, c, unassigned], &[truck, van, idle], &index);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].vehicle_id, "v1");
        assert_eq!(rows[0].plate.as_deref(), Some("ABC-1234"));
        assert_eq!(rows[0].trip_count, 2);
        assert_eq!(rows[0].revenue, 1500.0);
        assert_eq!(rows[0].cost, 100.0);
        assert_eq!(rows[0].profit, 1400.0);
        assert_eq!(rows[0].profit_percentage, 93.3);

        assert_eq!(rows[1].vehicle_id, "v2");
        assert_eq!(rows[1].profit, -50.0);
        assert_eq!(rows[1].profit_percentage, -25.0);
        assert!(rows.iter().all(|r| r.vehicle_id != "v3"));
    }

    #[test]
    fn test_zero_revenue_percentage_is_zero() {
        let truck = vehicle("v1", "Volvo", None);
        let mut t = trip("t1", 0.0, Some(10.0), "2024-03-05");
        t.vehicle = Some(truck.clone());
        let index = ExpenseIndex::build(&[expense("e1", Some("t1"), 80.0)]);

        let rows = build_vehicle_performance(&[t], &[truck], &index);

        assert_eq!(rows[0].profit, -80.0);
        assert_eq!(rows[0].profit_percentage, 0.0);
        assert!(!rows[0].profit_percentage.is_nan());
    }

    #[test]
    fn test_revenue_partitions_across_vehicles() {
        let vehicles: Vec<_> = (0..3)
            .map(|i| vehicle(&format!("v{}", i), "Volvo", None))
            .collect();
        let trips: Vec<_> = (0..9)
            .map(|i| {
                let mut t = trip(&format!("t{}", i), 100.0 * (i + 1) as f64, Some(5.0), "2024-02-01");
                t.vehicle = Some(vehicles[i % 3].clone());
                t
            })
            .collect();

        let rows = build_vehicle_performance(&trips, &vehicles, &ExpenseIndex::default());
        let ranked_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
        let total_revenue: f64 = trips.iter().map(|t| t.freight_value).sum();

        assert_eq!(ranked_revenue, total_revenue);
    }

    #[test]
    fn test_rank_by_profit_descending() {
        let rows = vec![
            VehiclePerformance {
                vehicle_id: "low".into(),
                plate: None,
                brand: "A".into(),
                trip_count: 1,
                revenue: 100.0,
                cost: 90.0,
                profit: 10.0,
                profit_percentage: 10.0,
            },
            VehiclePerformance {
                vehicle_id: "high".into(),
                plate: None,
                brand: "B".into(),
                trip_count: 1,
                revenue: 100.0,
                cost: 50.0,
                profit: 50.0,
                profit_percentage: 50.0,
            },
        ];

        let ranked = rank_by_profit(rows);
        assert_eq!(ranked[0].vehicle_id, "high");
        assert_eq!(ranked[0].tier(), PerformanceTier::Excellent);
        assert_eq!(ranked[1].tier(), PerformanceTier::Average);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(PerformanceTier::from_percentage(30.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_percentage(29.9), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(15.0), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(0.0), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_percentage(-0.1), PerformanceTier::Poor);
    }
}
