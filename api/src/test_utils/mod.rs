//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory adapter covers the happy paths; the mocks here cover
//! storage failures and races that a real store can't produce on demand.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
