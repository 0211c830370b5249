//! Test modules for the Makani Substring Index.
//!
//! This module contains the internal testing infrastructure, including:
//! - Unit tests for each component
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all edge cases named by the index contract (empty key, empty
//!   token, case sensitivity, repeated tokens)
//! - Property-based testing for the substring-containment guarantee

pub mod error_tests;
pub mod test_utils;
