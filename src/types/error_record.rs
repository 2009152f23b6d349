//! Structured error records and the local sink payload.

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Free-form caller context attached to a record.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Normalized, immutable unit emitted by the logging service.
///
/// Serializes with camelCase keys; the serialized form is the payload handed
/// to external sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    timestamp: i64,
    severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    url: String,
    user_agent: String,
}

/// Field values for [`ErrorRecord::new`].
#[derive(Debug, Clone, Default)]
pub struct RecordParts {
    pub message: String,
    pub stack: Option<String>,
    pub component_stack: Option<String>,
    pub user_id: Option<String>,
    pub timestamp: i64,
    pub severity: Severity,
    pub metadata: Option<Metadata>,
    pub url: String,
    pub user_agent: String,
}

impl ErrorRecord {
    #[inline]
    pub fn new(parts: RecordParts) -> Self {
        let RecordParts {
            message,
            stack,
            component_stack,
            user_id,
            timestamp,
            severity,
            metadata,
            url,
            user_agent,
        } = parts;
        Self {
            message,
            stack,
            component_stack,
            user_id,
            timestamp,
            severity,
            metadata,
            url,
            user_agent,
        }
    }

    /// Returns the failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the raw stack, if the failure carried one.
    #[inline]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Returns the component trace for render failures.
    #[inline]
    pub fn component_stack(&self) -> Option<&str> {
        self.component_stack.as_deref()
    }

    /// Returns the authenticated user, if known.
    #[inline]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Milliseconds since the Unix epoch at record construction.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the severity the record was logged with.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the caller-supplied metadata.
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns the location current at record construction.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the client identification string.
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Renders the timestamp as ISO-8601 UTC, e.g. `2023-06-15T12:00:00.000Z`.
    ///
    /// Out-of-range timestamps render as an empty string.
    pub fn iso_timestamp(&self) -> String {
        iso_timestamp(self.timestamp)
    }

    /// Human-readable log line: `[SEVERITY] message`.
    pub fn headline(&self) -> String {
        format!("[{}] {}", self.severity.label(), self.message)
    }

    /// Borrowed structured side-payload for the local sink.
    pub fn console_payload(&self) -> ConsolePayload<'_> {
        ConsolePayload {
            stack: self.stack(),
            component_stack: self.component_stack(),
            user_id: self.user_id(),
            metadata: self.metadata(),
            timestamp: self.iso_timestamp(),
            url: &self.url,
        }
    }
}

/// Structured payload written next to each local sink line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolePayload<'a> {
    pub stack: Option<&'a str>,
    pub component_stack: Option<&'a str>,
    pub user_id: Option<&'a str>,
    pub metadata: Option<&'a Metadata>,
    pub timestamp: String,
    pub url: &'a str,
}

impl ConsolePayload<'_> {
    /// Metadata rendered as compact JSON, or an empty string when absent.
    pub fn metadata_json(&self) -> String {
        self.metadata
            .and_then(|metadata| serde_json::to_string(metadata).ok())
            .unwrap_or_default()
    }
}

pub(crate) fn iso_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
