//! Built-in failure presentations.

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;

use super::{Action, Component, Element, Node, RenderResult, RenderScope};
use crate::types::Failure;

pub const HEADING: &str = "Something went wrong";
pub const SUMMARY: &str = "We encountered an unexpected error.";
pub const RETRY_LABEL: &str = "Try again";
pub const HOME_LABEL: &str = "Go to homepage";
pub const HOME_TARGET: &str = "/";

/// Default boundary fallback.
///
/// Always offers a way back to a working state: "Go to homepage" navigates
/// to `/`, and "Try again" appears when a reset callback is supplied.
#[derive(Clone, Default)]
pub struct ErrorDisplay {
    error: Option<Failure>,
    reset_error: Option<Rc<dyn Fn()>>,
}

impl ErrorDisplay {
    #[inline]
    pub fn new(error: Option<Failure>) -> Self {
        Self { error, reset_error: None }
    }

    #[inline]
    pub fn reset(mut self, reset_error: Option<Rc<dyn Fn()>>) -> Self {
        self.reset_error = reset_error;
        self
    }

    pub fn to_node(&self) -> Node {
        let mut details = Element::new("div").child(Element::new("p").text(SUMMARY));
        if let Some(error) = &self.error {
            details = details.child(
                Element::new("pre").attr("data-testid", "error-message").text(error.message()),
            );
        }

        let mut actions = Element::new("div").attr("class", "actions");
        if let Some(reset) = &self.reset_error {
            actions = actions.child(
                Element::new("button")
                    .attr("data-testid", "error-retry")
                    .text(RETRY_LABEL)
                    .on_click(Action::Invoke(Rc::clone(reset))),
            );
        }
        actions = actions.child(
            Element::new("button")
                .attr("data-testid", "error-home")
                .text(HOME_LABEL)
                .on_click(Action::Navigate(HOME_TARGET.to_string())),
        );

        Element::new("div")
            .attr("data-testid", "error-display")
            .attr("role", "alert")
            .child(Element::new("h2").text(HEADING))
            .child(details)
            .child(actions)
            .into()
    }
}

impl Component for ErrorDisplay {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("ErrorDisplay")
    }

    fn render(&self, _scope: &mut RenderScope) -> RenderResult {
        Ok(self.to_node())
    }
}

/// Inline message for form fields; renders nothing when the message is empty.
#[derive(Debug, Clone, Default)]
pub struct InlineError {
    pub message: String,
    pub id: Option<String>,
}

impl InlineError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), id: None }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Component for InlineError {
    fn render(&self, _scope: &mut RenderScope) -> RenderResult {
        if self.message.is_empty() {
            return Ok(Node::Empty);
        }

        let mut element = Element::new("div").attr("class", "inline-error").attr("role", "alert");
        if let Some(id) = &self.id {
            element = element.attr("id", id.as_str());
        }
        Ok(element.text(self.message.as_str()).into())
    }
}

pub const TRIGGER_MESSAGE: &str = "This is a test error triggered by ErrorTrigger component";

/// Fails its render pass once armed; used to exercise boundaries.
///
/// Unarmed, it renders a panel whose button arms it. The next render pass
/// then fails.
#[derive(Debug, Clone, Default)]
pub struct ErrorTrigger {
    armed: Rc<Cell<bool>>,
    label: Option<String>,
}

impl ErrorTrigger {
    pub fn new(throw_on_render: bool) -> Self {
        Self { armed: Rc::new(Cell::new(throw_on_render)), label: None }
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    #[inline]
    pub fn arm(&self) {
        self.armed.set(true);
    }
}

impl Component for ErrorTrigger {
    fn render(&self, _scope: &mut RenderScope) -> RenderResult {
        if self.armed.get() {
            return Err(Failure::new(TRIGGER_MESSAGE));
        }

        let armed = Rc::clone(&self.armed);
        let button = Element::new("button")
            .attr("data-testid", "error-trigger")
            .text(self.label.as_deref().unwrap_or("Trigger Error"))
            .on_click(Action::invoke(move || armed.set(true)));

        Ok(Element::new("div")
            .child(Element::new("h3").text("Error Boundary Test"))
            .child(button)
            .into())
    }
}
