//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The repository port has only a handful of methods
//! - Manual mocks are more explicit and easier to debug

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
