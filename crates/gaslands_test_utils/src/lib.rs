//! # Gaslands Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Catalog and roster fixtures
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
