//! Domain layer
//!
//! The student and grade model, free of I/O.
//! - `entities`: Students, subjects and grade records
//! - `ports`: Traits for the directory and the aggregator

pub mod entities;
pub mod ports;
