//! Example: Fire-and-Forget External Delivery
//!
//! Forwards production records to an async collector through `SpawnSink`.

use std::time::Duration;

use error_relay::config::ReportConfig;
use error_relay::prelude::*;
use error_relay::sink::{AsyncExternalSink, SinkError, SpawnSink};
use error_relay::ErrorRecord;

struct StdoutCollector;

impl AsyncExternalSink for StdoutCollector {
    async fn deliver(&self, record: ErrorRecord) -> Result<(), SinkError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        let body = serde_json::to_string_pretty(&record)
            .map_err(|e| SinkError::Delivery(e.to_string()))?;
        println!("POST /api/log-error\n{}", body);
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let service = ErrorLoggingService::builder()
        .config(ReportConfig::production())
        .external_sink(SpawnSink::new(StdoutCollector))
        .build();

    service.report(&Failure::new("checkout total mismatch")).severity(Severity::Critical).log();

    // Delivery is never awaited by the service; give it a moment before exit.
    tokio::time::sleep(Duration::from_millis(50)).await;
}
