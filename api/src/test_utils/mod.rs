//! Test utilities
//!
//! Hand-written test doubles and fixtures for unit testing.
//!
//! Why manual doubles instead of mockall?
//! - Call counts are plain fields the test can read back
//! - Scripted outcomes (fail once, then succeed) stay inside the double
//!   and never leak into the service under test
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
