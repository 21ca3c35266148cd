//! Integration test utilities for the activity feed
//!
//! This crate provides fixtures and an in-memory change-log source for
//! end-to-end tests across the core, common, and service crates.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
