//! Logging initialisation for the arbor CLI.
//!
//! Diagnostics go to stderr so the weights printed on stdout stay
//! machine-readable. `ARBOR_LOG_FORMAT` selects the format, `RUST_LOG` the
//! level, and records sent through the `log` facade are bridged into
//! `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::{debug, subscriber::SetGlobalDefaultError};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static STATUS: OnceLock<LoggingStatus> = OnceLock::new();

/// Output format of the diagnostics stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

impl LogFormat {
    /// Returns the spelling accepted in `ARBOR_LOG_FORMAT`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    /// Parses a format name case-insensitively; blank input means `human`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" | "" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// How [`init_logging`] left the global subscriber.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoggingStatus {
    /// The arbor subscriber is the global default.
    Installed,
    /// A subscriber was already in place and has been kept.
    AlreadyConfigured,
}

/// Errors raised while reading the logging configuration.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `ARBOR_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Later calls return the status of the first one. A subscriber installed
/// elsewhere, for example by a test harness, is kept and the attempt is noted
/// on it at `debug` level.
///
/// # Errors
/// Returns [`LoggingError`] if `ARBOR_LOG_FORMAT` is not Unicode or names an
/// unsupported format.
pub fn init_logging() -> Result<LoggingStatus, LoggingError> {
    if let Some(status) = STATUS.get() {
        return Ok(*status);
    }

    let format = format_from_env()?;
    let status = settle_install(install_subscriber(format), format);
    Ok(*STATUS.get_or_init(|| status))
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), SetGlobalDefaultError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the `log` slot.
    let _ = LogTracer::init();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
}

fn settle_install(result: Result<(), SetGlobalDefaultError>, format: LogFormat) -> LoggingStatus {
    match result {
        Ok(()) => {
            debug!(format = format.as_str(), "structured logging installed");
            LoggingStatus::Installed
        }
        Err(error) => {
            debug!(
                format = format.as_str(),
                %error,
                "structured logging already configured elsewhere"
            );
            LoggingStatus::AlreadyConfigured
        }
    }
}
