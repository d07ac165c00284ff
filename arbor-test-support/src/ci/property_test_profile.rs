//! Property-test run profile read from the environment.
//!
//! Suites pass their own defaults; CI and local runs tune them through
//! [`PROGTEST_CASES_ENV_KEY`] and [`ARBOR_PBT_FORK_ENV_KEY`]. Unusable values
//! are logged and ignored.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Why an override was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected a positive integer, got {raw:?}")]
    NotANumber {
        /// Raw environment value.
        raw: String,
    },
    /// The case count was zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {raw:?}")]
    NotAFlag {
        /// Raw environment value.
        raw: String,
    },
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the defaults.
    ///
    /// # Examples
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(ARBOR_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::NotANumber`] or [`OverrideError::ZeroCases`].
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

/// Parses a boolean flag, case-insensitively.
///
/// # Errors
/// Returns [`OverrideError::NotAFlag`] for unrecognised spellings.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotAFlag {
            raw: raw.to_owned(),
        }),
    }
}
