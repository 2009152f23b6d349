//! Render guard: contains failures raised while a subtree renders.
//!
//! An [`ErrorBoundary`] is a supervisory wrapper around the render pass of
//! its child, not a general-purpose `catch`:
//!
//! - caught: `Err` returned by the child's render pass, and panics unwinding
//!   out of it;
//! - not caught: failures in event-handler [`Action`](super::Action)s, in
//!   async work, and in the boundary's own fallback.
//!
//! The state machine has two states and one transition. Once failed, a
//! boundary stays failed; only a fresh instance renders the child again.

use std::borrow::Cow;
use std::cell::{Ref, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;

use super::display::ErrorDisplay;
use super::{Component, Node, RenderResult, RenderScope};
use crate::service::ErrorLoggingService;
use crate::sink::LOG_TARGET;
use crate::types::Failure;

type OnError = Box<dyn Fn(&Failure, &ErrorInfo)>;

/// Context captured alongside a contained failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Innermost-first trace of the components being rendered.
    pub component_stack: String,
}

impl ErrorInfo {
    #[inline]
    pub fn new<S: Into<String>>(component_stack: S) -> Self {
        Self { component_stack: component_stack.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed {
        error: Failure,
        info: ErrorInfo,
    },
}

impl BoundaryState {
    #[inline]
    pub fn has_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[inline]
    pub fn captured_error(&self) -> Option<&Failure> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Healthy => None,
        }
    }

    #[inline]
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failed { info, .. } => Some(info),
            Self::Healthy => None,
        }
    }
}

/// Wraps a child component and renders a fallback once the child fails.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use error_relay::render::{component, render};
/// use error_relay::{ErrorBoundary, ErrorLoggingService};
///
/// let service = Arc::new(ErrorLoggingService::default());
/// let boundary = ErrorBoundary::new(component("Profile", |_| Err("no session".into())))
///     .reporting_to(service);
///
/// let output = render(&boundary).unwrap();
/// assert!(output.find_by_test_id("error-display").is_some());
/// assert!(output.contains_text("no session"));
/// ```
pub struct ErrorBoundary<C> {
    child: C,
    fallback: Option<Node>,
    on_error: Option<OnError>,
    reset_error: Option<Rc<dyn Fn()>>,
    state: RefCell<BoundaryState>,
}

impl<C: Component> ErrorBoundary<C> {
    #[inline]
    pub fn new(child: C) -> Self {
        Self { child, fallback: None, on_error: None, reset_error: None, state: RefCell::default() }
    }

    /// Replaces the default [`ErrorDisplay`] fallback.
    pub fn fallback(mut self, fallback: Node) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Called exactly once, with the failure and its component trace.
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&Failure, &ErrorInfo) + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    /// Forwards captured failures to `service` as render errors.
    pub fn reporting_to(self, service: Arc<ErrorLoggingService>) -> Self {
        self.on_error(move |error, info| service.log_render_error(error, info, None))
    }

    /// Retry callback offered by the default fallback.
    pub fn reset_error<F: Fn() + 'static>(mut self, reset_error: F) -> Self {
        self.reset_error = Some(Rc::new(reset_error));
        self
    }

    #[inline]
    pub fn child(&self) -> &C {
        &self.child
    }

    #[inline]
    pub fn state(&self) -> Ref<'_, BoundaryState> {
        self.state.borrow()
    }

    fn render_fallback(&self, error: &Failure, scope: &mut RenderScope) -> RenderResult {
        match &self.fallback {
            Some(fallback) => scope.render_child(fallback),
            None => {
                let display =
                    ErrorDisplay::new(Some(error.clone())).reset(self.reset_error.clone());
                scope.render_child(&display)
            },
        }
    }

    fn capture(&self, error: Failure, info: ErrorInfo) -> Failure {
        tracing::debug!(
            target: LOG_TARGET,
            error = error.message(),
            component_stack = %info.component_stack,
            "render failure contained by error boundary"
        );

        *self.state.borrow_mut() =
            BoundaryState::Failed { error: error.clone(), info: info.clone() };

        if let Some(on_error) = &self.on_error {
            on_error(&error, &info);
        }
        error
    }
}

impl<C: Component> Component for ErrorBoundary<C> {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("ErrorBoundary")
    }

    fn render(&self, scope: &mut RenderScope) -> RenderResult {
        let captured = self.state.borrow().captured_error().cloned();
        if let Some(error) = captured {
            return self.render_fallback(&error, scope);
        }

        let depth = scope.depth();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| scope.render_child(&self.child)));

        let (error, component_stack) = match outcome {
            Ok(Ok(node)) => return Ok(node),
            Ok(Err(error)) => {
                let trace = scope.take_failure_trace().unwrap_or_else(|| scope.component_stack());
                (error, trace)
            },
            Err(payload) => {
                let trace = scope.component_stack();
                scope.unwind_to(depth);
                (Failure::from_panic(payload.as_ref()), trace)
            },
        };

        let error = self.capture(error, ErrorInfo { component_stack });
        self.render_fallback(&error, scope)
    }
}

impl<C> core::fmt::Debug for ErrorBoundary<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("has_fallback", &self.fallback.is_some())
            .field("has_on_error", &self.on_error.is_some())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
