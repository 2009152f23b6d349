//! Intent-named reporting helpers for failures outside the render pass.
//!
//! Event handlers, async callbacks and service calls are outside any
//! boundary's catchment and must report explicitly. [`ErrorHandler`] fixes
//! the severity and a `type` tag per call site.
//!
//! | method | severity | `type` tag |
//! |--------|----------|------------|
//! | [`handle_api_error`](ErrorHandler::handle_api_error) | error | `api_error` |
//! | [`handle_user_action_error`](ErrorHandler::handle_user_action_error) | warning | `user_action_error` |
//! | [`log_info`](ErrorHandler::log_info) | info | `info` |
//! | [`handle_critical_error`](ErrorHandler::handle_critical_error) | critical | `critical_error` |

use std::sync::Arc;

use serde_json::Value;

use crate::service::ErrorLoggingService;
use crate::types::{Failure, Metadata, Severity};

pub const API_ERROR: &str = "api_error";
pub const USER_ACTION_ERROR: &str = "user_action_error";
pub const INFO: &str = "info";
pub const CRITICAL_ERROR: &str = "critical_error";

/// Cheap-to-clone handle exposing the four reporting intents.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use error_relay::{metadata, ErrorHandler, ErrorLoggingService};
///
/// let handler = ErrorHandler::new(Arc::new(ErrorLoggingService::default()));
///
/// let err = std::io::Error::other("upstream timed out");
/// handler.handle_api_error(err, Some(metadata! { "endpoint" => "/api/orders" }));
/// handler.handle_user_action_error("form invalid", "submit_order", None);
/// handler.log_info("draft autosaved", None);
/// ```
#[derive(Debug, Clone)]
pub struct ErrorHandler {
    service: Arc<ErrorLoggingService>,
}

impl ErrorHandler {
    #[inline]
    pub fn new(service: Arc<ErrorLoggingService>) -> Self {
        Self { service }
    }

    #[inline]
    pub fn service(&self) -> &Arc<ErrorLoggingService> {
        &self.service
    }

    /// API or data fetching failure.
    pub fn handle_api_error(&self, error: impl Into<Failure>, metadata: Option<Metadata>) {
        let metadata = tagged(API_ERROR, None, metadata);
        self.service.log_error(&error.into(), Severity::Error, Some(metadata), None);
    }

    /// Failure of a user interaction such as a form submission.
    pub fn handle_user_action_error(
        &self,
        error: impl Into<Failure>,
        action: &str,
        metadata: Option<Metadata>,
    ) {
        let metadata = tagged(USER_ACTION_ERROR, Some(action), metadata);
        self.service.log_error(&error.into(), Severity::Warning, Some(metadata), None);
    }

    /// Informational event; the message becomes a stackless failure.
    pub fn log_info(&self, message: &str, metadata: Option<Metadata>) {
        let metadata = tagged(INFO, None, metadata);
        self.service.log_error(&Failure::new(message), Severity::Info, Some(metadata), None);
    }

    /// Failure that needs immediate attention.
    pub fn handle_critical_error(&self, error: impl Into<Failure>, metadata: Option<Metadata>) {
        let metadata = tagged(CRITICAL_ERROR, None, metadata);
        self.service.log_error(&error.into(), Severity::Critical, Some(metadata), None);
    }
}

impl From<Arc<ErrorLoggingService>> for ErrorHandler {
    fn from(service: Arc<ErrorLoggingService>) -> Self {
        Self::new(service)
    }
}

/// Fixed keys first, caller metadata last: caller keys win on collision.
fn tagged(tag: &str, action: Option<&str>, metadata: Option<Metadata>) -> Metadata {
    let mut merged = Metadata::new();
    merged.insert("type".to_string(), Value::from(tag));
    if let Some(action) = action {
        merged.insert("action".to_string(), Value::from(action));
    }
    if let Some(extra) = metadata {
        merged.extend(extra);
    }
    merged
}
