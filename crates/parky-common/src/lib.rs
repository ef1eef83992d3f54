//! Parky Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and utilities for the Parky workspace.
//!
//! # Overview
//!
//! - **Types**: the public transfer objects exposed by the Parky API
//!   (`NationalParkDto`, `TrailDto`, `Difficulty`)
//! - **Logging**: tracing subscriber setup shared by every binary
//!
//! # Example
//!
//! ```no_run
//! use parky_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     let _guard = init_logging(&config)?;
//!     tracing::info!("Parky started");
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;

pub use types::{Difficulty, NationalParkDto, TrailDto};
