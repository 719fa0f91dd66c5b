//! Shared types for termweb.

pub mod bookmark;
pub mod errors;
