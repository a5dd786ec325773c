//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod aggregator;
pub mod directory;

pub use aggregator::GradeAggregator;
pub use directory::StudentDirectory;
