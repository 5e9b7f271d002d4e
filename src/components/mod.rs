//! Reusable view components.

pub mod document_link;
