use std::io;

use error_relay::config::{BuildMode, ConfigError, ReportConfig};
use error_relay::types::RecordParts;
use error_relay::{metadata, ErrorRecord, Failure, Severity};
use serde_json::json;

#[derive(Debug)]
struct QueryFailed {
    source: io::Error,
}

impl std::fmt::Display for QueryFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("query failed")
    }
}

impl std::error::Error for QueryFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn failure_from_error_keeps_display_text() {
    let failure = Failure::from(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"));
    assert_eq!(failure.message(), "upstream timed out");
}

#[test]
fn failure_from_error_records_cause_chain() {
    let error = QueryFailed { source: io::Error::other("connection reset") };
    let failure = Failure::from_error(&error);

    assert_eq!(failure.message(), "query failed");
    assert!(failure.stack().unwrap().ends_with("caused by: connection reset"));
}

#[test]
fn failure_from_boxed_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> =
        "not a number".parse::<u32>().unwrap_err().into();
    let failure = Failure::from(boxed);
    assert_eq!(failure.message(), "invalid digit found in string");
}

#[test]
fn failure_from_strings_has_no_stack() {
    assert_eq!(Failure::from("a"), Failure::new("a"));
    assert_eq!(Failure::from(String::from("b")).stack(), None);
    assert_eq!(Failure::new("c").to_string(), "c");
}

#[test]
fn severity_serializes_lowercase() {
    let encoded: Vec<String> =
        Severity::ALL.iter().map(|s| serde_json::to_string(s).unwrap()).collect();
    assert_eq!(encoded, [r#""info""#, r#""warning""#, r#""error""#, r#""critical""#]);
    assert_eq!(serde_json::from_str::<Severity>(r#""critical""#).unwrap(), Severity::Critical);
}

#[test]
fn severity_parse_rejects_unknown_values() {
    assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!("fatal".parse::<Severity>(), Err(ConfigError::InvalidSeverity("fatal".into())));
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let record = ErrorRecord::new(RecordParts {
        message: "render failed".into(),
        stack: Some("at Chart".into()),
        component_stack: Some("\n    at Chart".into()),
        user_id: Some("u-17".into()),
        timestamp: 1_686_830_400_000,
        severity: Severity::Error,
        metadata: Some(metadata! { "retry" => 2 }),
        url: "https://test-app.com/dashboard".into(),
        user_agent: "test-user-agent".into(),
    });

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "message": "render failed",
            "stack": "at Chart",
            "componentStack": "\n    at Chart",
            "userId": "u-17",
            "timestamp": 1_686_830_400_000_i64,
            "severity": "error",
            "metadata": { "retry": 2 },
            "url": "https://test-app.com/dashboard",
            "userAgent": "test-user-agent",
        })
    );
}

#[test]
fn record_deserializes_without_optional_fields() {
    let record: ErrorRecord = serde_json::from_value(json!({
        "message": "m",
        "timestamp": 0,
        "severity": "info",
        "url": "/",
        "userAgent": "agent",
    }))
    .unwrap();

    assert_eq!(record.severity(), Severity::Info);
    assert_eq!(record.stack(), None);
    assert_eq!(record.metadata(), None);
    assert_eq!(record.iso_timestamp(), "1970-01-01T00:00:00.000Z");
}

#[test]
fn console_payload_metadata_json_is_empty_when_absent() {
    let record = ErrorRecord::new(RecordParts { message: "m".into(), ..Default::default() });
    assert_eq!(record.console_payload().metadata_json(), "");
}

#[test]
fn build_mode_parses_aliases() {
    assert_eq!("prod".parse::<BuildMode>(), Ok(BuildMode::Production));
    assert_eq!(" Development ".parse::<BuildMode>(), Ok(BuildMode::Development));
    assert!(matches!("staging".parse::<BuildMode>(), Err(ConfigError::InvalidMode(_))));
}

#[test]
fn report_config_constructors() {
    assert!(ReportConfig::production().mode.is_production());
    assert!(!ReportConfig::development().mode.is_production());
    assert_eq!(ReportConfig::default().mode, BuildMode::from_env());
}
