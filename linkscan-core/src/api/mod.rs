//! Public API for linkscan-core
//!
//! This module provides the stable construction and scanning surface that
//! front-ends (the CLI, downstream entity recognizers) build against,
//! hiding the automaton internals.

mod error;
mod scanner;

pub use error::{Error, Result};
pub use scanner::TokenScanner;
