//! Extension trait for `Future<Output = Result<T, E>>`.

use core::fmt::Display;
use core::future::Future;

use super::report_future::ReportFuture;
use crate::handler::ErrorHandler;

/// Extension trait that reports a future's error when it resolves.
///
/// Mirrors the sync [`ResultReportExt`](crate::traits::ResultReportExt).
///
/// # Examples
///
/// ```rust
/// use error_relay::prelude_async::*;
///
/// async fn example(handler: &ErrorHandler) {
///     let result = async { Err::<(), _>("gateway timeout") }
///         .report_api_errors(handler)
///         .await;
///     assert_eq!(result, Err("gateway timeout"));
/// }
/// ```
pub trait FutureReportExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: Display,
{
    /// Reports an error as an API failure once the future resolves to `Err`.
    fn report_api_errors(self, handler: &ErrorHandler) -> ReportFuture<Self> {
        ReportFuture::new(self, handler.clone())
    }
}

impl<Fut, T, E> FutureReportExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
}
