//! cctdb CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `cctdb` binary.

pub mod cli;
pub mod input;
pub mod layout;
pub mod output;
pub mod schema;

pub use cli::Args;
