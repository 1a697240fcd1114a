//! Output generation for analysis results.
//!
//! # Submodules
//!
//! - [`json`]: Normalizes and serializes results to JSON, optionally to a file
//! - [`text`]: Renders results as a human-readable plain-text report

pub mod json;
pub mod text;
