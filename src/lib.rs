//! Fit scoring and recommendation engine for a study-abroad advising service.
//!
//! The `advising` module holds the pure scoring core; `catalog` loads the
//! externally owned university catalog; the remaining modules carry the
//! application plumbing shared by the CLI and embedding services.

pub mod advising;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
