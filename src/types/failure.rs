//! The failure value carried through the reporting pipeline.

use core::any::Any;
use core::fmt::Display;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// A failure raised by application code: a message plus an optional raw stack.
///
/// Any [`std::error::Error`] converts through [`Failure::from_error`]; strings,
/// `std::io::Error` and boxed errors also convert with `From`. Caught panic
/// payloads go through [`Failure::from_panic`].
///
/// # Examples
///
/// ```
/// use error_relay::Failure;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "profile.json missing");
/// let failure = Failure::from(io);
/// assert_eq!(failure.message(), "profile.json missing");
///
/// let parse = "x".parse::<u8>().unwrap_err();
/// assert_eq!(Failure::from_error(&parse).message(), parse.to_string());
///
/// let synthetic = Failure::new("cache warmed");
/// assert!(synthetic.stack().is_none());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
    stack: Option<String>,
}

impl Failure {
    /// Creates a synthetic failure without a stack.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), stack: None }
    }

    /// Creates a failure with an explicit raw stack.
    #[inline]
    pub fn with_stack<S: Into<String>, T: Into<String>>(message: S, stack: T) -> Self {
        Self { message: message.into(), stack: Some(stack.into()) }
    }

    /// Builds a failure from a borrowed error.
    ///
    /// The stack holds a captured backtrace (only when `RUST_BACKTRACE` enables
    /// capture) followed by the error's `source()` chain.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut stack = String::new();

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            stack.push_str(&backtrace.to_string());
        }

        let mut source = error.source();
        while let Some(cause) = source {
            if !stack.is_empty() {
                stack.push('\n');
            }
            stack.push_str("caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { message: error.to_string(), stack: (!stack.is_empty()).then_some(stack) }
    }

    /// Converts a payload returned by [`std::panic::catch_unwind`].
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&'static str>() {
            Self::new(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            Self::new(text.clone())
        } else {
            Self::new("non-string panic payload")
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Self::from_error(&error)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Failure {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::from_error(error.as_ref())
    }
}

impl From<&str> for Failure {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
