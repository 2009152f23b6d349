use std::num::ParseIntError;

use error_relay::config::ReportConfig;
use error_relay::traits::ResultReportExt;
use error_relay::{Channel, ErrorHandler, Severity};

use crate::support::harness;

#[test]
fn ok_results_report_nothing() {
    let h = harness(ReportConfig::production());
    let handler = ErrorHandler::new(h.service.clone());

    let value = "7".parse::<u8>().report_api_error(&handler);

    assert_eq!(value, Ok(7));
    assert!(h.local.emissions().is_empty());
    assert!(h.external.lock().unwrap().is_empty());
}

#[test]
fn api_errors_are_reported_and_returned() {
    let h = harness(ReportConfig::production());
    let handler = ErrorHandler::new(h.service.clone());

    let result: Result<u8, ParseIntError> = "seven".parse::<u8>().report_api_error(&handler);

    let error = result.unwrap_err();
    let sent = h.external.lock().unwrap();
    assert_eq!(sent[0].message(), error.to_string());
    assert_eq!(sent[0].severity(), Severity::Error);
    assert_eq!(sent[0].metadata().unwrap()["type"], "api_error");
}

#[test]
fn user_action_errors_carry_the_action() {
    let h = harness(ReportConfig::development());
    let handler = ErrorHandler::new(h.service.clone());

    let _ = Err::<(), _>("card declined").report_user_action_error(&handler, "checkout");

    let emission = h.local.single();
    assert_eq!(emission.channel, Channel::Warn);
    assert_eq!(emission.line, "[WARNING] card declined");
    assert_eq!(emission.payload["metadata"]["action"], "checkout");
}

#[test]
fn critical_errors_use_the_error_channel() {
    let h = harness(ReportConfig::development());
    let handler = ErrorHandler::new(h.service.clone());

    let _ = Err::<(), _>("ledger out of balance").report_critical(&handler);

    let emission = h.local.single();
    assert_eq!(emission.channel, Channel::Error);
    assert_eq!(emission.line, "[CRITICAL] ledger out of balance");
    assert_eq!(emission.payload["metadata"]["type"], "critical_error");
}
