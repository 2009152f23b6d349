//! Extension traits for reporting failures from ordinary control flow.
//!
//! - [`ResultReportExt`]: report an `Err` through an
//!   [`ErrorHandler`](crate::ErrorHandler) and keep the `Result` unchanged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use error_relay::traits::ResultReportExt;
//! use error_relay::{ErrorHandler, ErrorLoggingService};
//!
//! let handler = ErrorHandler::new(Arc::new(ErrorLoggingService::default()));
//! let saved: Result<(), &str> = Err("disk full");
//! assert!(saved.report_user_action_error(&handler, "save_draft").is_err());
//! ```

pub mod report_ext;

pub use report_ext::ResultReportExt;
