//! Severity classification and local output channels.

use core::fmt::Display;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Urgency of a reported failure.
///
/// The variants carry no ordering semantics. A severity only selects the
/// local output [`Channel`] and the label printed in front of the message.
///
/// # Examples
///
/// ```
/// use error_relay::{Channel, Severity};
///
/// assert_eq!(Severity::default(), Severity::Error);
/// assert_eq!(Severity::Critical.channel(), Channel::Error);
/// assert_eq!(Severity::Warning.label(), "WARNING");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    #[default]
    Error,
    Critical,
}

/// Output channel of the local sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Warn,
    Error,
}

/// Severity to channel mapping, indexed by [`Severity::index`].
const SEVERITY_CHANNELS: [Channel; 4] = [
    Channel::Info,  // info
    Channel::Warn,  // warning
    Channel::Error, // error
    Channel::Error, // critical
];

const SEVERITY_LABELS: [&str; 4] = ["INFO", "WARNING", "ERROR", "CRITICAL"];

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] =
        [Severity::Info, Severity::Warning, Severity::Error, Severity::Critical];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::Critical => 3,
        }
    }

    /// Returns the local sink channel this severity is written to.
    #[inline]
    pub const fn channel(self) -> Channel {
        SEVERITY_CHANNELS[self.index()]
    }

    /// Returns the upper-case label used in log lines.
    #[inline]
    pub const fn label(self) -> &'static str {
        SEVERITY_LABELS[self.index()]
    }

    /// Returns the lowercase wire name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidSeverity(s.to_string()))
    }
}

impl Channel {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Info => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }
}
