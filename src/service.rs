//! The error logging service: single chokepoint from failure to record.
//!
//! A service is an ordinary value with an explicit lifetime. Build one at
//! startup, wrap it in an [`Arc`] and hand clones to whatever reports errors:
//! boundaries, the [`ErrorHandler`](crate::ErrorHandler), tower layers.
//!
//! # Examples
//!
//! ```
//! use error_relay::{ErrorLoggingService, Failure, Severity, StaticAmbient};
//! use error_relay::config::ReportConfig;
//!
//! let service = ErrorLoggingService::builder()
//!     .config(ReportConfig::development())
//!     .ambient(StaticAmbient::new(1_686_830_400_000, "https://app.test/", "agent"))
//!     .build();
//!
//! let record = service.prepare_record(&Failure::new("boom"), Severity::Warning, None, None);
//! assert_eq!(record.iso_timestamp(), "2023-06-15T12:00:00.000Z");
//!
//! service.report(&Failure::new("boom")).severity(Severity::Warning).log();
//! ```

use std::sync::Arc;

use crate::ambient::{Ambient, SystemAmbient};
use crate::config::ReportConfig;
use crate::render::ErrorInfo;
use crate::sink::{ExternalSink, LocalSink, PlaceholderSink, TracingSink};
use crate::types::{ErrorRecord, Failure, Metadata, RecordParts, Severity};

/// Turns failures into [`ErrorRecord`]s and emits them.
///
/// Every call writes exactly one entry to the local sink. In production mode
/// the record is then handed to the external sink. Logging never fails.
#[derive(Clone)]
pub struct ErrorLoggingService {
    config: ReportConfig,
    ambient: Arc<dyn Ambient>,
    local: Arc<dyn LocalSink>,
    external: Arc<dyn ExternalSink>,
}

impl ErrorLoggingService {
    /// Creates a service with the default ambient context and sinks.
    pub fn new(config: ReportConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts a builder with the default ambient context and sinks.
    #[inline]
    pub fn builder() -> ErrorLoggingServiceBuilder {
        ErrorLoggingServiceBuilder::default()
    }

    /// Returns the configuration the service was built with.
    #[inline]
    pub fn config(&self) -> ReportConfig {
        self.config
    }

    /// Logs a failure.
    ///
    /// Ambient values (time, location, user agent) are read now, not at the
    /// moment the failure originally happened.
    pub fn log_error(
        &self,
        error: &Failure,
        severity: Severity,
        metadata: Option<Metadata>,
        component_stack: Option<&str>,
    ) {
        let record = self.prepare_record(error, severity, metadata, component_stack);

        self.local.emit(severity.channel(), &record.headline(), &record.console_payload());

        if self.config.mode.is_production() {
            self.external.send(record);
        }
    }

    /// Logs a failure caught by an [`ErrorBoundary`](crate::ErrorBoundary).
    ///
    /// Severity is always [`Severity::Error`]; the component stack comes from
    /// the boundary's capture info.
    pub fn log_render_error(&self, error: &Failure, info: &ErrorInfo, metadata: Option<Metadata>) {
        let component_stack = Some(info.component_stack.as_str()).filter(|stack| !stack.is_empty());
        self.log_error(error, Severity::Error, metadata, component_stack);
    }

    /// Starts a report with default arguments (severity `Error`, no metadata).
    #[inline]
    pub fn report<'a>(&'a self, error: &'a Failure) -> Report<'a> {
        Report {
            service: self,
            error,
            severity: Severity::default(),
            metadata: None,
            component_stack: None,
        }
    }

    /// Builds the record `log_error` would emit, without emitting it.
    pub fn prepare_record(
        &self,
        error: &Failure,
        severity: Severity,
        metadata: Option<Metadata>,
        component_stack: Option<&str>,
    ) -> ErrorRecord {
        ErrorRecord::new(RecordParts {
            message: error.message().to_string(),
            stack: error.stack().map(str::to_string),
            component_stack: component_stack.map(str::to_string),
            user_id: self.ambient.user_id(),
            timestamp: self.ambient.now_millis(),
            severity,
            metadata,
            url: self.ambient.location(),
            user_agent: self.ambient.user_agent(),
        })
    }
}

impl core::fmt::Debug for ErrorLoggingService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorLoggingService").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Default for ErrorLoggingService {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

/// Builder for [`ErrorLoggingService`].
pub struct ErrorLoggingServiceBuilder {
    config: ReportConfig,
    ambient: Arc<dyn Ambient>,
    local: Arc<dyn LocalSink>,
    external: Arc<dyn ExternalSink>,
}

impl Default for ErrorLoggingServiceBuilder {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
            ambient: Arc::new(SystemAmbient::new()),
            local: Arc::new(TracingSink),
            external: Arc::new(PlaceholderSink),
        }
    }
}

impl ErrorLoggingServiceBuilder {
    /// Sets the build-mode configuration.
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the ambient context source.
    pub fn ambient<A: Ambient + 'static>(mut self, ambient: A) -> Self {
        self.ambient = Arc::new(ambient);
        self
    }

    /// Shares an ambient source the application keeps updating.
    pub fn shared_ambient(mut self, ambient: Arc<dyn Ambient>) -> Self {
        self.ambient = ambient;
        self
    }

    /// Replaces the default [`TracingSink`].
    pub fn local_sink<S: LocalSink + 'static>(mut self, sink: S) -> Self {
        self.local = Arc::new(sink);
        self
    }

    /// Replaces the default [`PlaceholderSink`].
    pub fn external_sink<S: ExternalSink + 'static>(mut self, sink: S) -> Self {
        self.external = Arc::new(sink);
        self
    }

    /// Builds the service.
    pub fn build(self) -> ErrorLoggingService {
        ErrorLoggingService {
            config: self.config,
            ambient: self.ambient,
            local: self.local,
            external: self.external,
        }
    }
}

/// A pending report; see [`ErrorLoggingService::report`].
#[must_use = "a report does nothing until `log` is called"]
pub struct Report<'a> {
    service: &'a ErrorLoggingService,
    error: &'a Failure,
    severity: Severity,
    metadata: Option<Metadata>,
    component_stack: Option<&'a str>,
}

impl<'a> Report<'a> {
    /// Overrides the default [`Severity::Error`].
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attaches caller metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attaches a component trace.
    pub fn component_stack(mut self, component_stack: &'a str) -> Self {
        self.component_stack = Some(component_stack);
        self
    }

    /// Logs the report through the service.
    pub fn log(self) {
        self.service.log_error(self.error, self.severity, self.metadata, self.component_stack)
    }
}
