mod support;

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use support::{daily_batch, ticket};
use ticket_analytics::api::ProjectionStrategy;
use ticket_analytics::config::{AnalyticsConfig, ProjectionConfig};
use ticket_analytics::services::{analyze, analyze_at};

#[test]
fn test_two_tickets_distinct_statuses() {
    let records = vec![
        ticket(1, "open", "high", "2024-03-15T10:00:00Z"),
        ticket(2, "pending", "medium", "2024-03-15T11:30:00Z"),
    ];
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();

    assert_eq!(result.total_tickets, 2);
    let json = serde_json::to_value(&result.status_distribution).unwrap();
    assert_eq!(json, json!({"status": ["open", "pending"], "count": [1, 1]}));
    assert_eq!(result.projection, None);
}

#[test]
fn test_same_date_same_hour() {
    let records: Vec<_> = (1..=10)
        .map(|i| ticket(i, "open", "low", "2024-03-15T14:05:00Z"))
        .collect();
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();

    assert_eq!(
        result.tickets_by_date.date,
        vec![NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()]
    );
    assert_eq!(result.tickets_by_date.count, vec![10]);
    assert_eq!(result.hourly_distribution.hours, vec![14]);
    assert_eq!(result.hourly_distribution.counts, vec![10]);
    let stats = result.hourly_distribution.statistics.unwrap();
    assert!(stats.std.is_none());
    assert_eq!(stats.mean, 10.0);
}

#[test]
fn test_linear_trend_over_nine_days() {
    let records = daily_batch(1, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();

    let projection = result.projection.expect("nine days of history should project");
    assert_eq!(projection.strategy, ProjectionStrategy::LinearTrend);
    assert!((projection.values[0] - 10.0).abs() < 1e-9);
    assert_eq!(
        projection.dates[0],
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );
    assert_eq!(projection.dates.len(), 7);
}

#[test]
fn test_single_day_with_zero_history_floor_has_no_projection() {
    let config = AnalyticsConfig {
        projection: ProjectionConfig {
            min_history_days: 0,
            ..ProjectionConfig::default()
        },
    };
    let records = vec![ticket(1, "open", "high", "2024-03-15T10:00:00Z")];

    let result = analyze(&records, &config).unwrap();
    assert_eq!(result.total_tickets, 1);
    assert!(result.projection.is_none());
}

#[test]
fn test_empty_batch_is_client_fault() {
    let err = analyze(&[], &AnalyticsConfig::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_bad_timestamp_names_field() {
    let records = vec![
        ticket(1, "open", "high", "2024-03-15T10:00:00Z"),
        ticket(2, "open", "high", "not-a-date"),
    ];
    let err = analyze(&records, &AnalyticsConfig::default()).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.field(), Some("created_at"));
    assert!(err.to_string().contains("created_at"));
}

#[test]
fn test_counts_are_conserved() {
    let records = vec![
        ticket(1, "open", "high", "2024-03-11T08:00:00Z"),
        ticket(2, "solved", "low", "2024-03-12T09:00:00Z"),
        ticket(3, "solved", "low", "2024-03-12T23:59:00Z"),
        ticket(4, "pending", "urgent", "2024-03-14T00:00:00Z"),
        ticket(5, "solved", "high", "2024-03-17T12:00:00+05:00"),
    ];
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();

    assert_eq!(result.status_distribution.total(), 5);
    assert_eq!(result.priority_distribution.total(), 5);
    assert_eq!(result.tickets_by_date.count.iter().sum::<usize>(), 5);
    assert_eq!(result.hourly_distribution.counts.iter().sum::<usize>(), 5);
    assert_eq!(result.weekday_distribution.counts.iter().sum::<usize>(), 5);
    assert_eq!(result.status_distribution.categories[0], "solved");
}

#[test]
fn test_daily_statistics_present() {
    let records = daily_batch(1, &[2, 4, 6]);
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();

    let daily = result.daily_statistics.unwrap();
    assert_eq!(daily.mean, 4.0);
    assert_eq!(daily.median, 4.0);
    assert_eq!(daily.q1, 3.0);
    assert_eq!(daily.q3, 5.0);
    assert_eq!(daily.std, Some(2.0));
}

#[test]
fn test_repeated_calls_are_identical() {
    let records = daily_batch(1, &[3, 1, 4, 1, 5, 9, 2, 6, 5]);
    let now = Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap();
    let config = AnalyticsConfig::default();

    let first = serde_json::to_string(&analyze_at(&records, now, &config).unwrap()).unwrap();
    let second = serde_json::to_string(&analyze_at(&records, now, &config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_flat_mean_strategy_relative_to_now() {
    let config = AnalyticsConfig {
        projection: ProjectionConfig {
            strategy: ProjectionStrategy::FlatMean,
            ..ProjectionConfig::default()
        },
    };
    let records = daily_batch(1, &[2, 2, 2]);

    let now = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    let result = analyze_at(&records, now, &config).unwrap();
    let projection = result.projection.unwrap();
    assert_eq!(projection.values, vec![2.0; 7]);
    assert_eq!(
        projection.dates[0],
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    );

    let much_later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let result = analyze_at(&records, much_later, &config).unwrap();
    assert!(result.projection.is_none());
}

#[test]
fn test_result_wire_shape() {
    let records = vec![ticket(1, "open", "high", "2024-03-15T10:00:00Z")];
    let result = analyze(&records, &AnalyticsConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_tickets"], 1);
    assert_eq!(json["priority_distribution"]["priority"], json!(["high"]));
    assert_eq!(json["tickets_by_date"]["date"], json!(["2024-03-15"]));
    assert_eq!(json["hourly_distribution"]["hours"], json!([10]));
    assert_eq!(json["weekday_distribution"]["weekdays"], json!([4]));
    assert!(json["hourly_distribution"]["statistics"]["std"].is_null());
    assert!(json["projection"].is_null());
}
