mod support;

use std::io::Write;

use support::with_scoped_env;
use ticket_analytics::config::{ConfigError, ProjectionStrategy, Settings};

const OVERRIDE_KEYS: [&str; 4] = ["HOST", "PORT", "PROJECTION_STRATEGY", "PROJECTION_HORIZON_DAYS"];

fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    OVERRIDE_KEYS.iter().map(|k| (*k, None)).collect()
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[server]
host = "127.0.0.1"
port = 5000

[analytics.projection]
strategy = "flat_mean"
horizon_days = 14
"#
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.server.bind_address(), "127.0.0.1:5000");
    assert_eq!(
        settings.analytics.projection.strategy,
        ProjectionStrategy::FlatMean
    );
    assert_eq!(settings.analytics.projection.horizon_days, 14);
    assert_eq!(settings.analytics.projection.recency_window_days, 7);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = ").unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_env_overrides() {
    let mut changes = cleared_env();
    changes.extend([
        ("PORT", Some("9090")),
        ("PROJECTION_STRATEGY", Some("flat_mean")),
        ("PROJECTION_HORIZON_DAYS", Some("3")),
    ]);

    let settings = with_scoped_env(&changes, || {
        let mut settings = Settings::default();
        settings.apply_env_overrides().unwrap();
        settings
    });

    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(
        settings.analytics.projection.strategy,
        ProjectionStrategy::FlatMean
    );
    assert_eq!(settings.analytics.projection.horizon_days, 3);
}

#[test]
fn test_invalid_env_value() {
    let mut changes = cleared_env();
    changes.push(("PORT", Some("not-a-port")));

    let err = with_scoped_env(&changes, || {
        Settings::default().apply_env_overrides().unwrap_err()
    });
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "PORT"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_zero_horizon_from_env_rejected() {
    let mut changes = cleared_env();
    changes.push(("PROJECTION_HORIZON_DAYS", Some("0")));

    let result = with_scoped_env(&changes, || Settings::default().apply_env_overrides());
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_huge_horizon_from_env_rejected() {
    let mut changes = cleared_env();
    changes.push(("PROJECTION_HORIZON_DAYS", Some("4000000000")));

    let result = with_scoped_env(&changes, || Settings::default().apply_env_overrides());
    match result {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "projection.horizon_days"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_no_env_keeps_defaults() {
    let settings = with_scoped_env(&cleared_env(), || {
        let mut settings = Settings::default();
        settings.apply_env_overrides().unwrap();
        settings
    });
    assert_eq!(settings, Settings::default());
}
