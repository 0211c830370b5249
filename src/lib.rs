//! Makani Substring Index Library
//!
//! This library contains the core components of the Makani Substring Index:
//! an in-memory, trie-backed index over short text tokens that answers
//! substring-containment queries (not just prefix queries), plus the
//! configuration and wordlist-loading layers around it. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! The Makani Substring Index is designed with the following principles in mind:
//! - Strict component boundaries: the index core is total and I/O-free,
//!   reading and reporting live in the driver layers
//! - Build-then-query lifecycle enforced through the type system
//! - Comprehensive error handling at the configuration and I/O boundary
//! - Iterative tree walks so input size never limits the call stack

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Makani Substring Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaniResult<()> {
    // Set up global error reporter with tracing
    let reporter = error::TracingErrorReporter::new();
    error::set_error_reporter(std::sync::Arc::new(reporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
