//! Local and external sinks.
//!
//! - [`LocalSink`] receives every record, synchronously, on the channel picked
//!   by the record's severity. [`TracingSink`] is the default and writes
//!   through the `tracing` facade.
//! - [`ExternalSink`] is the production-only forwarding seam. Delivery is
//!   fire-and-forget: no return value, no retry.

use std::sync::Arc;

use crate::types::{Channel, ConsolePayload, ErrorRecord};

#[cfg(feature = "async-tokio")]
mod spawn;
#[cfg(feature = "async-tokio")]
pub use spawn::{AsyncExternalSink, SpawnSink};

/// Target used for every event emitted by this crate.
pub const LOG_TARGET: &str = "error_relay";

/// Errors reported by asynchronous external sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    Delivery(String),
    Rejected { status: u16 },
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Delivery(reason) => write!(f, "delivery failed: {}", reason),
            Self::Rejected { status } => write!(f, "rejected by collector (status {})", status),
        }
    }
}

impl std::error::Error for SinkError {}

/// Console-equivalent output used unconditionally for every record.
pub trait LocalSink: Send + Sync {
    fn emit(&self, channel: Channel, line: &str, payload: &ConsolePayload<'_>);
}

impl<S: LocalSink + ?Sized> LocalSink for Arc<S> {
    #[inline]
    fn emit(&self, channel: Channel, line: &str, payload: &ConsolePayload<'_>) {
        (**self).emit(channel, line, payload)
    }
}

/// Forwarding seam to an out-of-process monitoring integration.
pub trait ExternalSink: Send + Sync {
    fn send(&self, record: ErrorRecord);
}

impl<F> ExternalSink for F
where
    F: Fn(ErrorRecord) + Send + Sync,
{
    #[inline]
    fn send(&self, record: ErrorRecord) {
        self(record)
    }
}

/// Writes records as `tracing` events at info, warn or error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

type Emitter = fn(&str, &ConsolePayload<'_>);

/// Indexed by channel: info, warn, error.
const EMITTERS: [Emitter; 3] = [emit_info, emit_warn, emit_error];

macro_rules! emitter {
    ($name:ident, $level:ident) => {
        fn $name(line: &str, payload: &ConsolePayload<'_>) {
            tracing::$level!(
                target: LOG_TARGET,
                stack = payload.stack,
                component_stack = payload.component_stack,
                user_id = payload.user_id,
                metadata = %payload.metadata_json(),
                timestamp = %payload.timestamp,
                url = payload.url,
                "{}",
                line
            );
        }
    };
}

emitter!(emit_info, info);
emitter!(emit_warn, warn);
emitter!(emit_error, error);

impl LocalSink for TracingSink {
    #[inline]
    fn emit(&self, channel: Channel, line: &str, payload: &ConsolePayload<'_>) {
        EMITTERS[channel.index()](line, payload)
    }
}

/// Stand-in for a real monitoring integration: logs what would be sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSink;

impl ExternalSink for PlaceholderSink {
    fn send(&self, record: ErrorRecord) {
        let body = serde_json::to_string(&record).unwrap_or_default();
        tracing::info!(
            target: LOG_TARGET,
            record = %body,
            "error would be sent to external service"
        );
    }
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ExternalSink for NoopSink {
    #[inline]
    fn send(&self, _record: ErrorRecord) {}
}
