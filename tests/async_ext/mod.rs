use std::future::{pending, ready};
use std::time::Duration;

use error_relay::async_ext::{FutureReportExt, ReportFuture};
use error_relay::config::ReportConfig;
use error_relay::{metadata, ErrorHandler, Severity};

use crate::support::harness;

#[tokio::test]
async fn ok_output_passes_through_silently() {
    let h = harness(ReportConfig::production());
    let handler = ErrorHandler::new(h.service.clone());

    let value = ready(Ok::<_, String>(5)).report_api_errors(&handler).await;

    assert_eq!(value, Ok(5));
    assert!(h.local.emissions().is_empty());
}

#[tokio::test]
async fn error_output_is_reported_once_as_api_error() {
    let h = harness(ReportConfig::production());
    let handler = ErrorHandler::new(h.service.clone());

    let result = async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Err::<(), _>("gateway timeout")
    }
    .report_api_errors(&handler)
    .await;

    assert_eq!(result, Err("gateway timeout"));
    let emission = h.local.single();
    assert_eq!(emission.line, "[ERROR] gateway timeout");

    let sent = h.external.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].severity(), Severity::Error);
    assert_eq!(sent[0].metadata().unwrap()["type"], "api_error");
}

#[tokio::test]
async fn metadata_is_merged_after_the_tag() {
    let h = harness(ReportConfig::development());
    let handler = ErrorHandler::new(h.service.clone());

    let _ = ReportFuture::new(ready(Err::<(), _>("404")), handler)
        .with_metadata(metadata! { "endpoint" => "/api/users/7" })
        .await;

    let payload = h.local.single().payload;
    assert_eq!(payload["metadata"]["type"], "api_error");
    assert_eq!(payload["metadata"]["endpoint"], "/api/users/7");
}

#[tokio::test]
async fn dropped_future_reports_nothing() {
    let h = harness(ReportConfig::production());
    let handler = ErrorHandler::new(h.service.clone());

    let outcome = tokio::time::timeout(
        Duration::from_millis(5),
        pending::<Result<(), String>>().report_api_errors(&handler),
    )
    .await;

    assert!(outcome.is_err());
    assert!(h.local.emissions().is_empty());
}
