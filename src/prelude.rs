//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_relay::prelude::*;
//!
//! let service = std::sync::Arc::new(ErrorLoggingService::new(ReportConfig::development()));
//! let handler = ErrorHandler::new(service);
//! handler.log_info("prelude loaded", Some(metadata! { "source" => "doc" }));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`metadata!`]
//! - **Types**: [`ErrorLoggingService`], [`ErrorHandler`], [`ErrorBoundary`],
//!   [`Failure`], [`Severity`], [`Metadata`], [`ReportConfig`]
//! - **Render**: [`Component`], [`RenderScope`], [`RenderResult`], [`Node`],
//!   [`Element`], [`render`], [`component`]
//! - **Traits**: [`ResultReportExt`]

pub use crate::metadata;

pub use crate::config::ReportConfig;
pub use crate::handler::ErrorHandler;
pub use crate::render::{
    component, render, Component, Element, ErrorBoundary, Node, RenderResult, RenderScope,
};
pub use crate::service::ErrorLoggingService;
pub use crate::types::{Failure, Metadata, Severity};

pub use crate::traits::ResultReportExt;
