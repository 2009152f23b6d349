//! Future wrapper that reports errors on resolution.

use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::handler::ErrorHandler;
use crate::types::{Failure, Metadata};

pin_project! {
    /// A Future wrapper that reports its error through an [`ErrorHandler`].
    ///
    /// # Cancel Safety
    ///
    /// `ReportFuture` is cancel-safe if the inner future is cancel-safe. A
    /// dropped future reports nothing.
    #[must_use = "futures do nothing unless polled"]
    pub struct ReportFuture<Fut> {
        #[pin]
        future: Fut,
        handler: Option<ErrorHandler>,
        metadata: Option<Metadata>,
    }
}

impl<Fut> ReportFuture<Fut> {
    #[inline]
    pub fn new(future: Fut, handler: ErrorHandler) -> Self {
        Self { future, handler: Some(handler), metadata: None }
    }

    /// Metadata merged into the report after the `type` tag.
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl<Fut, T, E> Future for ReportFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(Ok(value)) => {
                this.handler.take();
                Poll::Ready(Ok(value))
            },
            Poll::Ready(Err(error)) => {
                if let Some(handler) = this.handler.take() {
                    handler.handle_api_error(Failure::new(error.to_string()), this.metadata.take());
                }
                Poll::Ready(Err(error))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, T, E> FusedFuture for ReportFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Display,
{
    fn is_terminated(&self) -> bool {
        self.handler.is_none() || self.future.is_terminated()
    }
}
