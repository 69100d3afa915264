//! Shared test utilities for prepnotes integration tests.
//!
//! This module provides:
//! - Builders for material records and whole tables
//! - `TestHarness` for running batches against temp-directory tables

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
