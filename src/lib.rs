//! termweb — a minimal text-mode web browser with numbered link navigation.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod commands;
pub mod managers;
pub mod pages;
pub mod render;
pub mod services;
pub mod types;
