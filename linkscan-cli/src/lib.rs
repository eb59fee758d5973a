//! Linkscan CLI library
//!
//! This library provides the command-line interface for the linkscan
//! token scanner.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
