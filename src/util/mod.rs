//! Small browser-facing utilities.

pub mod theme;
