//! Shared test utilities used across arbor crates.
//!
//! - [`tracing::RecordingLayer`] captures spans and events so tests can assert
//!   instrumentation.
//! - [`ci::property_test_profile::ProptestRunProfile`] reads property-test
//!   tuning from the environment.

pub mod ci;
pub mod tracing;
