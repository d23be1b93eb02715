//! Test support utilities for the scorebook backend.
//!
//! Provides unified logging initialization and helpers for generating unique
//! test data so integration tests never collide on unique columns.

pub mod logging;
pub mod unique_helpers;
