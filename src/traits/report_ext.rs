//! Extension trait for reporting `Result` errors in place.
//!
//! Event handlers and other code outside the render pass use this to report
//! a failure and carry on with the original `Result`.

use core::fmt::Display;

use crate::handler::ErrorHandler;
use crate::types::Failure;

/// Reports the `Err` variant through an [`ErrorHandler`], passing the
/// `Result` through untouched.
///
/// The error is reported by its `Display` text.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use error_relay::traits::ResultReportExt;
/// use error_relay::{ErrorHandler, ErrorLoggingService};
///
/// let handler = ErrorHandler::new(Arc::new(ErrorLoggingService::default()));
///
/// let parsed = "42".parse::<u32>().report_api_error(&handler);
/// assert_eq!(parsed, Ok(42));
/// ```
pub trait ResultReportExt<T, E> {
    /// Reports an error as an API failure (severity `error`).
    fn report_api_error(self, handler: &ErrorHandler) -> Result<T, E>;

    /// Reports an error as a failed user action (severity `warning`).
    fn report_user_action_error(self, handler: &ErrorHandler, action: &str) -> Result<T, E>;

    /// Reports an error as critical.
    fn report_critical(self, handler: &ErrorHandler) -> Result<T, E>;
}

impl<T, E: Display> ResultReportExt<T, E> for Result<T, E> {
    #[inline]
    fn report_api_error(self, handler: &ErrorHandler) -> Result<T, E> {
        self.inspect_err(|e| handler.handle_api_error(Failure::new(e.to_string()), None))
    }

    #[inline]
    fn report_user_action_error(self, handler: &ErrorHandler, action: &str) -> Result<T, E> {
        self.inspect_err(|e| {
            handler.handle_user_action_error(Failure::new(e.to_string()), action, None)
        })
    }

    #[inline]
    fn report_critical(self, handler: &ErrorHandler) -> Result<T, E> {
        self.inspect_err(|e| handler.handle_critical_error(Failure::new(e.to_string()), None))
    }
}
