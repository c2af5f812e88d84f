//! Integration tests for freightdesk-core
//!
//! These tests exercise the full load → index → dashboard → filter workflow
//! against JSON record directories.

use std::path::Path;

use chrono::NaiveDate;
use freightdesk_core::{
    models::{FinancialSummary, TripStatus, NOT_INFORMED},
    DashboardConfig, DashboardFilter, DashboardSession, JsonDirSource,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
}

/// Two vehicles, three drivers' worth of trips across a few months, and
/// expenses including one for a trip that does not exist.
fn write_fleet(dir: &Path) {
    std::fs::write(
        dir.join("trips.json"),
        r#"[
            {
                "id": "t1",
                "driver": {"id": "d1", "name": "Ana"},
                "vehicle": {"id": "v1", "brand": "Volvo", "plate": "ABC-1234"},
                "origin": "Santos",
                "destination": "Campinas",
                "freight_value": 1000.0,
                "commission": 10.0,
                "start": "2024-03-05T09:00:00Z",
                "status": "COMPLETED"
            },
            {
                "id": "t2",
                "driver": {"id": "d2", "name": "Bruno"},
                "vehicle": {"id": "v2", "brand": "Scania"},
                "origin": "Curitiba",
                "freight_value": 500.0,
                "commission": 0.0,
                "start": "2024-03-20T09:00:00Z",
                "status": "IN_PROGRESS"
            },
            {
                "id": "t3",
                "driver": {"id": "d1", "name": "Ana"},
                "vehicle": {"id": "v1", "brand": "Volvo", "plate": "ABC-1234"},
                "origin": "Santos",
                "destination": "Rio de Janeiro",
                "freight_value": 800.0,
                "commission": 12.5,
                "start": "2024-01-10T09:00:00Z",
                "end": "2024-01-12T17:00:00Z",
                "status": "COMPLETED"
            },
            {
                "id": "t4",
                "origin": "Belo Horizonte",
                "freight_value": 300.0,
                "start": "2023-06-01T09:00:00Z",
                "status": "CANCELLED"
            }
        ]"#,
    )
    .unwrap();

    std::fs::write(
        dir.join("vehicles.json"),
        r#"[
            {"id": "v1", "brand": "Volvo", "plate": "ABC-1234", "model_year": 2019},
            {"id": "v2", "brand": "Scania", "active": true},
            {"id": "v3", "brand": "DAF", "active": false}
        ]"#,
    )
    .unwrap();

    std::fs::write(
        dir.join("expenses.json"),
        r#"[
            {"id": "e1", "trip_id": "t3", "name": "Fuel", "value": 250.0},
            {"id": "e2", "trip_id": "t3", "name": "Tolls", "value": 50.0},
            {"id": "e3", "trip_id": "t4", "value": 400.0},
            {"id": "e4", "trip_id": "ghost", "value": 10000.0},
            {"id": "e5", "description": "Office supplies", "value": 35.0}
        ]"#,
    )
    .unwrap();
}

async fn load(dir: &Path) -> DashboardSession {
    DashboardSession::load(&JsonDirSource::new(dir), DashboardConfig::default()).await
}

#[tokio::test]
async fn test_full_dashboard_workflow() {
    let dir = tempfile::tempdir().unwrap();
    write_fleet(dir.path());
    let session = load(dir.path()).await;

    let data = session.dashboard(&DashboardFilter::default(), today());

    // Costs: t1 = 100, t2 = 0, t3 = 100 + 300, t4 = 400; the ghost expense is ignored
    let summary = &data.financial_summary;
    assert_eq!(summary.total_revenue, 2600.0);
    assert_eq!(summary.total_cost, 900.0);
    assert_eq!(summary.net_profit, 1700.0);
    assert_eq!(summary.active_trips, 1);
    assert_eq!(summary.loss_trips, 1);

    // Oct..Mar; t4 (June 2023) is outside the window
    assert_eq!(
        data.monthly_performance.labels,
        vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]
    );
    assert_eq!(
        data.monthly_performance.revenues,
        vec![0.0, 0.0, 0.0, 800.0, 0.0, 1500.0]
    );
    assert_eq!(
        data.monthly_performance.costs,
        vec![0.0, 0.0, 0.0, 400.0, 0.0, 100.0]
    );

    // 8 weeks ending with the week of 2024-03-25 (Monday)
    assert_eq!(data.weekly_performance.len(), 8);
    assert_eq!(data.weekly_performance.labels[0], "05/02-11/02");
    assert_eq!(data.weekly_performance.labels[7], "25/03-31/03");
    assert_eq!(data.weekly_performance.revenues[4], 1000.0);
    assert_eq!(data.weekly_performance.revenues[6], 500.0);

    // v3 has no trips and is dropped
    let vehicles: Vec<_> = data
        .vehicle_performance
        .iter()
        .map(|v| v.vehicle_id.as_str())
        .collect();
    assert_eq!(vehicles, vec!["v1", "v2"]);
    assert_eq!(data.vehicle_performance[0].trip_count, 2);
    assert_eq!(data.vehicle_performance[0].profit, 1300.0);
    assert_eq!(data.vehicle_performance[0].profit_percentage, 72.2);

    // Newest first
    let recent: Vec<_> = data.recent_trips.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(recent, vec!["t2", "t1", "t3", "t4"]);
    assert_eq!(data.recent_trips[0].route, "Curitiba");
    assert_eq!(data.recent_trips[1].route, "Santos → Campinas");
    assert_eq!(data.recent_trips[3].driver, NOT_INFORMED);
    assert_eq!(data.recent_trips[3].vehicle, NOT_INFORMED);
    assert_eq!(data.recent_trips[3].status, TripStatus::Cancelled);
}

#[tokio::test]
async fn test_filters_recompute_without_reloading() {
    let dir = tempfile::tempdir().unwrap();
    write_fleet(dir.path());
    let session = load(dir.path()).await;

    // Removing the files proves filter changes never touch the source
    std::fs::remove_file(dir.path().join("trips.json")).unwrap();
    std::fs::remove_file(dir.path().join("expenses.json")).unwrap();

    let by_driver = session.dashboard(&DashboardFilter::new(None, Some("d1".into())), today());
    assert_eq!(by_driver.financial_summary.total_revenue, 1800.0);
    assert_eq!(by_driver.financial_summary.total_cost, 500.0);
    assert_eq!(by_driver.vehicle_performance.len(), 1);

    let by_both = session.dashboard(
        &DashboardFilter::new(Some("v2".into()), Some("d2".into())),
        today(),
    );
    assert_eq!(by_both.financial_summary.total_revenue, 500.0);
    assert_eq!(by_both.financial_summary.active_trips, 1);

    let idle = session.dashboard(&DashboardFilter::new(Some("v3".into()), None), today());
    assert_eq!(idle.financial_summary, FinancialSummary::default());
    assert!(idle.vehicle_performance.is_empty());
    assert!(idle.recent_trips.is_empty());
}

#[tokio::test]
async fn test_missing_collections_degrade_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    write_fleet(dir.path());
    std::fs::remove_file(dir.path().join("expenses.json")).unwrap();
    std::fs::write(dir.path().join("vehicles.json"), "not json").unwrap();

    let session = load(dir.path()).await;
    let data = session.dashboard(&DashboardFilter::default(), today());

    // Commission only: 100 + 0 + 100 + 0
    assert_eq!(data.financial_summary.total_revenue, 2600.0);
    assert_eq!(data.financial_summary.total_cost, 200.0);
    assert!(data.vehicle_performance.is_empty());
    assert_eq!(data.recent_trips.len(), 4);
}

#[tokio::test]
async fn test_empty_directory_is_an_empty_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let session = load(dir.path()).await;
    let data = session.dashboard(&DashboardFilter::default(), today());

    assert!(session.is_empty());
    assert_eq!(data.financial_summary, FinancialSummary::default());
    assert_eq!(data.monthly_performance.len(), 6);
    assert_eq!(data.weekly_performance.len(), 8);
    assert!(data.recent_trips.is_empty());
}

#[tokio::test]
async fn test_alerts_report_and_options() {
    let dir = tempfile::tempdir().unwrap();
    write_fleet(dir.path());
    let session = load(dir.path()).await;

    let alerts = session.alerts(&DashboardFilter::default());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].trip_id.as_deref(), Some("t4"));

    let report = session.period_report(
        &DashboardFilter::default(),
        NaiveDate::from_ymd_opt(2024, 1, 1),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    );
    let ids: Vec<_> = report.rows.iter().map(|r| r.trip_id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t1", "t2"]);
    assert_eq!(report.totals.freight_value, 2300.0);
    assert_eq!(report.totals.commission_value, 200.0);
    assert_eq!(report.totals.expenses, 300.0);
    assert_eq!(report.totals.net_profit, 1800.0);

    let options = session.filter_options();
    assert_eq!(options.vehicles.len(), 3);
    let drivers: Vec<_> = options.drivers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(drivers, vec!["Ana", "Bruno"]);
}
