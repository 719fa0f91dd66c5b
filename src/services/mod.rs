//! Services for termweb: network access.

pub mod fetcher;
