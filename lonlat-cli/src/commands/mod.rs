//! CLI command implementations.
//!
//! Each command renders its output to a `String`; `main` prints it.

pub mod common;
pub mod config;
pub mod convert;
pub mod project;
