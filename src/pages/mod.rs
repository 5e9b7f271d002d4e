//! Route target views.

pub mod contents;
pub mod document;
pub mod not_found;
