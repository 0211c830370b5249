//! Error module for the Makani Substring Index.
//!
//! This module provides the error handling framework for the application,
//! following Rust's idiomatic error handling patterns with explicit error
//! types and proper error propagation.
//!
//! Note that the index core itself has no error type: both `index` and
//! `search` are total over any character sequence, and "no results" is an
//! empty collection. Errors exist only at the configuration and I/O boundary
//! of the driver.

use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::sync::Mutex;
use thiserror::Error;

use once_cell::sync::OnceCell;

pub mod config;

/// Result type alias used throughout the Makani Substring Index.
pub type MakaniResult<T> = Result<T, MakaniError>;

/// Core error enum for the Makani Substring Index.
#[derive(Error, Debug)]
pub enum MakaniError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading a wordlist or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: MakaniError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: MakaniError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    /// Creates a new tracing-backed error reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter.
static ERROR_REPORTER: OnceCell<Mutex<Arc<dyn ErrorReporter>>> = OnceCell::new();

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The reporter that receives all reported errors
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    if ERROR_REPORTER.set(Mutex::new(reporter)).is_err() {
        tracing::warn!("Error reporter was already set, ignoring new reporter");
    }
}

/// Report an error through the global reporter, if one is set.
///
/// Falls back to a plain tracing event when no reporter has been installed.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(mutex) => {
            let reporter = mutex.lock().unwrap_or_else(|poisoned| {
                tracing::error!("Error reporter lock was poisoned, recovering");
                poisoned.into_inner()
            });
            reporter.report(context);
        }
        None => tracing::error!("{context}"),
    }
}
