//! Minimal component tree hosting the render guard.
//!
//! A render pass walks [`Component`]s through a [`RenderScope`], which keeps
//! the stack of component names currently being rendered. That stack becomes
//! the component trace reported when an [`ErrorBoundary`] catches a failure.
//!
//! A component fails either by returning `Err(Failure)` from
//! [`Component::render`] or by panicking; boundaries contain both.
//!
//! # Examples
//!
//! ```
//! use error_relay::render::{component, render, Element, Node};
//! use error_relay::ErrorBoundary;
//!
//! let broken = component("Chart", |_| Err("dataset is empty".into()));
//! let page = ErrorBoundary::new(broken)
//!     .fallback(Element::new("p").text("chart unavailable").into());
//!
//! let output = render(&page).unwrap();
//! assert_eq!(output.text_content(), "chart unavailable");
//! assert!(page.state().has_failed());
//! ```

use std::borrow::Cow;
use std::rc::Rc;

use crate::types::{Failure, InlineVec};

pub mod boundary;
pub mod display;

pub use boundary::{BoundaryState, ErrorBoundary, ErrorInfo};
pub use display::{ErrorDisplay, ErrorTrigger, InlineError};

/// Outcome of rendering one component.
pub type RenderResult = Result<Node, Failure>;

/// Rendered output.
#[derive(Clone, Debug, Default)]
pub enum Node {
    #[default]
    Empty,
    Text(String),
    Element(Element),
    Fragment(Vec<Node>),
}

impl Node {
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {},
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                element.children.iter().for_each(|child| child.collect_text(out))
            },
            Self::Fragment(children) => children.iter().for_each(|child| child.collect_text(out)),
        }
    }

    #[inline]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_content().contains(needle)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Element(element) if predicate(element) => Some(element),
            Self::Element(element) => {
                element.children.iter().find_map(|child| child.find(predicate))
            },
            Self::Fragment(children) => children.iter().find_map(|child| child.find(predicate)),
            Self::Empty | Self::Text(_) => None,
        }
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.find(&|element| element.attr_value("data-testid") == Some(test_id))
    }

    /// First element in document order whose direct text equals `text`.
    pub fn find_by_text(&self, text: &str) -> Option<&Element> {
        self.find(&|element| element.own_text() == text)
    }
}

impl From<Element> for Node {
    #[inline]
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// A tagged element with attributes, children and an optional click action.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    attributes: InlineVec<(&'static str, String), 4>,
    children: Vec<Node>,
    action: Option<Action>,
}

impl Element {
    #[inline]
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attributes: InlineVec::new(), children: Vec::new(), action: None }
    }

    /// Sets an attribute, replacing an existing value.
    pub fn attr<V: Into<String>>(mut self, name: &'static str, value: V) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    #[inline]
    pub fn child<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    #[inline]
    pub fn text<S: Into<String>>(self, text: S) -> Self {
        self.child(Node::text(text))
    }

    #[inline]
    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Text of direct text children only.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// What happens when an element is activated.
#[derive(Clone)]
pub enum Action {
    Invoke(Rc<dyn Fn()>),
    Navigate(String),
}

impl Action {
    #[inline]
    pub fn invoke<F: Fn() + 'static>(callback: F) -> Self {
        Self::Invoke(Rc::new(callback))
    }

    /// Runs the callback, or hands the navigation target to `navigate`.
    pub fn trigger(&self, navigate: impl FnOnce(&str)) {
        match self {
            Self::Invoke(callback) => callback(),
            Self::Navigate(target) => navigate(target),
        }
    }
}

impl core::fmt::Debug for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Invoke(_) => f.write_str("Invoke(..)"),
            Self::Navigate(target) => f.debug_tuple("Navigate").field(target).finish(),
        }
    }
}

/// A unit of the render tree.
pub trait Component {
    /// Name shown in component traces.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(core::any::type_name::<Self>()))
    }

    /// Renders this component. Children must be rendered through
    /// [`RenderScope::render_child`] so they appear in component traces.
    fn render(&self, scope: &mut RenderScope) -> RenderResult;
}

impl Component for Node {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Node")
    }

    fn render(&self, _scope: &mut RenderScope) -> RenderResult {
        Ok(self.clone())
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }

    fn render(&self, scope: &mut RenderScope) -> RenderResult {
        (**self).render(scope)
    }
}

/// A named component backed by a closure. See [`component`].
pub struct FnComponent<F> {
    name: Cow<'static, str>,
    render: F,
}

/// Creates a named component from a render closure.
pub fn component<F>(name: impl Into<Cow<'static, str>>, render: F) -> FnComponent<F>
where
    F: Fn(&mut RenderScope) -> RenderResult,
{
    FnComponent { name: name.into(), render }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&mut RenderScope) -> RenderResult,
{
    fn name(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    fn render(&self, scope: &mut RenderScope) -> RenderResult {
        (self.render)(scope)
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// State of one render pass.
#[derive(Debug, Default)]
pub struct RenderScope {
    frames: InlineVec<Cow<'static, str>, 8>,
    /// Failure being propagated and the trace where it first surfaced.
    failure_trace: Option<(Failure, String)>,
}

impl RenderScope {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `child` with its name pushed onto the frame stack.
    pub fn render_child<C: Component + ?Sized>(&mut self, child: &C) -> RenderResult {
        self.frames.push(child.name());
        let result = child.render(self);
        match &result {
            Ok(_) => self.failure_trace = None,
            Err(error) => {
                let propagated = matches!(&self.failure_trace, Some((seen, _)) if seen == error);
                if !propagated {
                    self.failure_trace = Some((error.clone(), self.component_stack()));
                }
            },
        }
        self.frames.pop();
        result
    }

    /// Frames formatted innermost first, one `"\n    at Name"` line each.
    pub fn component_stack(&self) -> String {
        self.frames.iter().rev().fold(String::new(), |mut out, frame| {
            out.push_str("\n    at ");
            out.push_str(frame);
            out
        })
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Trace recorded where the pending failure was first observed.
    pub(crate) fn take_failure_trace(&mut self) -> Option<String> {
        self.failure_trace.take().map(|(_, trace)| trace)
    }

    /// Drops frames left behind by an unwinding panic.
    pub(crate) fn unwind_to(&mut self, depth: usize) {
        self.frames.truncate(depth);
        self.failure_trace = None;
    }
}

/// Runs one render pass from `root`.
///
/// Failures no boundary contains are returned as `Err`; panics no boundary
/// contains keep unwinding into the caller.
pub fn render<C: Component + ?Sized>(root: &C) -> RenderResult {
    RenderScope::new().render_child(root)
}
