//! Error capture and reporting for Rust UI applications.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_relay::*` or pick focused pieces as needed.
//!
//! - [`ErrorBoundary`] contains failures raised while a component subtree
//!   renders and swaps in a fallback.
//! - [`ErrorLoggingService`] turns a failure into an [`ErrorRecord`], writes
//!   it to the local sink and, in production builds, forwards it to an
//!   external sink.
//! - [`ErrorHandler`] reports failures from outside the render pass with a
//!   fixed severity per intent.
//!
//! # Examples
//!
//! ## Guarding a Subtree
//!
//! ```
//! use std::sync::Arc;
//! use error_relay::render::{component, render};
//! use error_relay::{ErrorBoundary, ErrorLoggingService};
//!
//! let service = Arc::new(ErrorLoggingService::default());
//! let page = ErrorBoundary::new(component("Widget", |_| panic!("widget state corrupted")))
//!     .reporting_to(Arc::clone(&service));
//!
//! let output = render(&page).unwrap();
//! assert!(output.contains_text("Something went wrong"));
//! ```
//!
//! ## Reporting Outside Rendering
//!
//! ```
//! use std::sync::Arc;
//! use error_relay::{metadata, ErrorHandler, ErrorLoggingService};
//!
//! let handler = ErrorHandler::new(Arc::new(ErrorLoggingService::default()));
//! handler.handle_critical_error("ledger out of balance", Some(metadata! { "account" => 7 }));
//! ```

/// Ambient context (clock, location, user agent) read per record
pub mod ambient;
/// Build-mode configuration
pub mod config;
/// Intent-named reporting helpers
pub mod handler;
/// Metadata construction macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Component tree, render pass and the error boundary
pub mod render;
/// The error logging service
pub mod service;
/// Local and external sinks
pub mod sink;
/// Extension traits for reporting from `Result`s
pub mod traits;
/// Severity, failure and record types
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

pub use ambient::{Ambient, StaticAmbient, SystemAmbient};
pub use handler::ErrorHandler;
pub use render::{BoundaryState, ErrorBoundary, ErrorInfo};
pub use service::ErrorLoggingService;
pub use traits::*;
pub use types::{Channel, ConsolePayload, ErrorRecord, Failure, Metadata, Severity};
