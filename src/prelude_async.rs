//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`FutureReportExt`](crate::async_ext::FutureReportExt) and
//! [`ReportFuture`](crate::async_ext::ReportFuture).

pub use crate::prelude::*;

pub use crate::async_ext::{FutureReportExt, ReportFuture};
