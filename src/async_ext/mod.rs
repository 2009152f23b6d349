//! Async extensions for error-relay.
//!
//! Async work is outside every boundary's catchment. These adapters report a
//! future's error through an [`ErrorHandler`](crate::ErrorHandler) when it
//! resolves, then hand the error back unchanged.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-relay = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_relay::prelude_async::*;
//!
//! async fn load_orders(handler: &ErrorHandler) -> Result<Vec<Order>, ApiError> {
//!     fetch_orders()
//!         .report_api_errors(handler)
//!         .with_metadata(metadata! { "endpoint" => "/api/orders" })
//!         .await
//! }
//! ```

mod future_ext;
mod report_future;

pub use future_ext::FutureReportExt;
pub use report_future::ReportFuture;
