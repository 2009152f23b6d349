//! Tokio-backed fire-and-forget delivery.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-relay = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;

use super::{ExternalSink, SinkError, LOG_TARGET};
use crate::types::ErrorRecord;

/// An external sink whose delivery is asynchronous, e.g. an HTTP collector.
pub trait AsyncExternalSink: Send + Sync + 'static {
    fn deliver(&self, record: ErrorRecord) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Adapts an [`AsyncExternalSink`] into an [`ExternalSink`] by spawning each
/// delivery onto a tokio runtime without awaiting it.
///
/// Failed deliveries are logged at debug level and dropped. When no runtime
/// is reachable the record is dropped as well.
///
/// # Example
///
/// ```rust,ignore
/// use error_relay::sink::{AsyncExternalSink, SinkError, SpawnSink};
///
/// struct Collector;
///
/// impl AsyncExternalSink for Collector {
///     async fn deliver(&self, record: ErrorRecord) -> Result<(), SinkError> {
///         post_json("/api/log-error", &record).await
///     }
/// }
///
/// let service = ErrorLoggingService::builder()
///     .external_sink(SpawnSink::new(Collector))
///     .build();
/// ```
#[derive(Debug)]
pub struct SpawnSink<S> {
    inner: Arc<S>,
    handle: Option<Handle>,
}

impl<S> SpawnSink<S> {
    /// Spawns onto whichever runtime is current at send time.
    #[inline]
    pub fn new(inner: S) -> Self {
        Self { inner: Arc::new(inner), handle: None }
    }

    /// Spawns onto the given runtime regardless of the caller's context.
    #[inline]
    pub fn with_handle(inner: S, handle: Handle) -> Self {
        Self { inner: Arc::new(inner), handle: Some(handle) }
    }

    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: AsyncExternalSink> ExternalSink for SpawnSink<S> {
    fn send(&self, record: ErrorRecord) {
        let handle = match self.handle.clone().or_else(|| Handle::try_current().ok()) {
            Some(handle) => handle,
            None => {
                tracing::debug!(
                    target: LOG_TARGET,
                    record_message = record.message(),
                    "no tokio runtime available, dropping error record"
                );
                return;
            },
        };

        let inner = Arc::clone(&self.inner);
        handle.spawn(async move {
            if let Err(err) = inner.deliver(record).await {
                tracing::debug!(
                    target: LOG_TARGET,
                    error = %err,
                    "external error sink delivery failed"
                );
            }
        });
    }
}
