//! Utility functions module
//!
//! Contains helper functions for rupee and ratio formatting shared by the
//! screen components.

pub mod format;

// Re-export commonly used functions
pub use format::{format_rupees, group_rupees, percent_label};
