//! Shared utilities for feature modules
//!
//! - **test_helpers**: in-memory repositories and record fixtures (test-only)

#[cfg(test)]
pub mod test_helpers;
