//! Shared utilities: numeric formatting for reports.

pub mod format;

pub use format::{format_value, round_to};
