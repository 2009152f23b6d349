//! Build-mode configuration.
//!
//! The only switch the pipeline reads is whether it runs as a production build:
//! production builds forward every record to the external sink, development
//! builds only write to the local sink.
//!
//! ```
//! use error_relay::config::{BuildMode, ReportConfig};
//!
//! assert!(ReportConfig::production().mode.is_production());
//! assert_eq!("prod".parse::<BuildMode>().unwrap(), BuildMode::Production);
//! ```

use core::fmt::Display;
use core::str::FromStr;

/// Environment variable consulted by [`BuildMode::from_env`].
pub const MODE_ENV_VAR: &str = "ERROR_RELAY_MODE";

/// Errors raised while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMode(String),
    InvalidSeverity(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMode(value) => write!(
                f,
                "invalid build mode '{}' (expected production|prod|development|dev)",
                value
            ),
            Self::InvalidSeverity(value) => write!(
                f,
                "invalid severity '{}' (expected info|warning|error|critical)",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode implied by the compile profile.
    #[inline]
    pub const fn from_profile() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Reads [`MODE_ENV_VAR`], falling back to [`BuildMode::from_profile`]
    /// when it is unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::parse::<BuildMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(err)) => {
                tracing::warn!(
                    target: crate::sink::LOG_TARGET,
                    error = %err,
                    "ignoring {}",
                    MODE_ENV_VAR
                );
                Self::from_profile()
            },
            None => Self::from_profile(),
        }
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Same as [`BuildMode::from_env`]: [`MODE_ENV_VAR`] first, then the compile
/// profile.
impl Default for BuildMode {
    fn default() -> Self {
        Self::from_env()
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Configuration of an [`ErrorLoggingService`](crate::ErrorLoggingService).
///
/// `ReportConfig::default()` honours [`MODE_ENV_VAR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub mode: BuildMode,
}

impl ReportConfig {
    /// Reads the mode from [`MODE_ENV_VAR`], falling back to the compile profile.
    #[inline]
    pub fn from_env() -> Self {
        Self { mode: BuildMode::from_env() }
    }

    /// Always forwards to the external sink.
    #[inline]
    pub const fn production() -> Self {
        Self { mode: BuildMode::Production }
    }

    /// Local sink only.
    #[inline]
    pub const fn development() -> Self {
        Self { mode: BuildMode::Development }
    }
}
