//! Presentation of diagnostic outcomes.
//!
//! This module provides:
//! - Plain and colored text rendering (two lines per entry: heading, value)
//! - JSON rendering of the full outcome
//! - Writing rendered results to a file
//!
//! Rendering only reads the outcome; labels and addresses are taken as the
//! orchestrator produced them.

mod export;
mod json;
mod text;

// Re-export public API
pub use export::export_results;
pub use json::render_json;
pub use text::{entry_lines, render_colored, render_text};
