//! Report module
//!
//! Plain-text rendering of report cards.

pub mod renderer;

pub use renderer::{format_score, render_report_card};
