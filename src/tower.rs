//! Tower integration for error-relay.
//!
//! This module provides a Tower `Layer` and `Service` that report every
//! service error through an [`ErrorHandler`] as an API failure and return the
//! error to the caller unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-relay = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_relay::tower::ReportLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(ReportLayer::new(handler.clone(), "orders-api"))
//!     .service(orders_client);
//! ```

use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::borrow::Cow;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::handler::ErrorHandler;
use crate::types::{Failure, Metadata};

/// Metadata key naming the wrapped service.
pub const SERVICE_KEY: &str = "service";

/// A Tower [`Layer`] that reports errors of the wrapped service.
#[derive(Clone, Debug)]
pub struct ReportLayer {
    handler: ErrorHandler,
    name: Cow<'static, str>,
}

impl ReportLayer {
    /// Creates a layer reporting through `handler`, tagging reports with
    /// `{"service": name}`.
    #[inline]
    pub fn new(handler: ErrorHandler, name: impl Into<Cow<'static, str>>) -> Self {
        Self { handler, name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> Layer<S> for ReportLayer {
    type Service = ReportService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ReportService { inner, handler: self.handler.clone(), name: self.name.clone() }
    }
}

/// A Tower [`Service`] that reports errors and passes them through.
///
/// This is created by [`ReportLayer`].
#[derive(Clone, Debug)]
pub struct ReportService<S> {
    inner: S,
    handler: ErrorHandler,
    name: Cow<'static, str>,
}

impl<S> ReportService<S> {
    #[inline]
    pub fn new(inner: S, handler: ErrorHandler, name: impl Into<Cow<'static, str>>) -> Self {
        Self { inner, handler, name: name.into() }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn metadata(&self) -> Metadata {
        crate::metadata! { SERVICE_KEY => &*self.name }
    }
}

impl<S, Request> Service<Request> for ReportService<S>
where
    S: Service<Request>,
    S::Error: Display,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ReportResponseFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match self.inner.poll_ready(cx) {
            Poll::Ready(Err(error)) => {
                let metadata = self.metadata();
                self.handler.handle_api_error(Failure::new(error.to_string()), Some(metadata));
                Poll::Ready(Err(error))
            },
            other => other,
        }
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        ReportResponseFuture::new(self.inner.call(request), self.handler.clone(), self.metadata())
    }
}

pin_project! {
    /// Future returned by [`ReportService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct ReportResponseFuture<F> {
        #[pin]
        inner: F,
        report: Option<(ErrorHandler, Metadata)>,
    }
}

impl<F> ReportResponseFuture<F> {
    #[inline]
    fn new(inner: F, handler: ErrorHandler, metadata: Metadata) -> Self {
        Self { inner, report: Some((handler, metadata)) }
    }
}

impl<F, T, E> Future for ReportResponseFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    type Output = Result<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => {
                this.report.take();
                Poll::Ready(Ok(response))
            },
            Poll::Ready(Err(error)) => {
                if let Some((handler, metadata)) = this.report.take() {
                    handler.handle_api_error(Failure::new(error.to_string()), Some(metadata));
                }
                Poll::Ready(Err(error))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for ReportResponseFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Display,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.report.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a service with error reporting.
pub trait ServiceReportExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its errors are reported through `handler`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_relay::tower::ServiceReportExt;
    ///
    /// let wrapped = billing_client.reporting_errors(handler.clone(), "billing");
    /// ```
    fn reporting_errors(
        self,
        handler: ErrorHandler,
        name: impl Into<Cow<'static, str>>,
    ) -> ReportService<Self> {
        ReportService::new(self, handler, name)
    }
}

impl<S, Request> ServiceReportExt<Request> for S where S: Service<Request> {}
