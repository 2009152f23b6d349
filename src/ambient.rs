//! Ambient context read at record construction time.

use std::sync::{PoisonError, RwLock};

/// Source of the contextual values stamped onto every [`ErrorRecord`](crate::ErrorRecord).
///
/// The logging service queries this on every call, so implementations must
/// return *current* values, not values cached at startup.
pub trait Ambient: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Current navigable location.
    fn location(&self) -> String;

    /// Client identification string.
    fn user_agent(&self) -> String;

    /// Authenticated user, if the integrating environment knows one.
    fn user_id(&self) -> Option<String> {
        None
    }
}

/// Ambient context backed by the system clock and a navigable location.
#[derive(Debug)]
pub struct SystemAmbient {
    location: RwLock<String>,
    user_agent: String,
}

impl SystemAmbient {
    pub fn new() -> Self {
        Self { location: RwLock::new("/".to_string()), user_agent: default_user_agent() }
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Records a navigation; later records carry the new location.
    pub fn navigate<S: Into<String>>(&self, location: S) {
        let mut current = self.location.write().unwrap_or_else(PoisonError::into_inner);
        *current = location.into();
    }
}

impl Default for SystemAmbient {
    fn default() -> Self {
        Self::new()
    }
}

impl Ambient for SystemAmbient {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn location(&self) -> String {
        self.location.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Fixed ambient values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticAmbient {
    pub now_millis: i64,
    pub location: String,
    pub user_agent: String,
    pub user_id: Option<String>,
}

impl StaticAmbient {
    pub fn new<L: Into<String>, A: Into<String>>(
        now_millis: i64,
        location: L,
        user_agent: A,
    ) -> Self {
        Self { now_millis, location: location.into(), user_agent: user_agent.into(), user_id: None }
    }

    pub fn with_user_id<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

impl Ambient for StaticAmbient {
    fn now_millis(&self) -> i64 {
        self.now_millis
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}
