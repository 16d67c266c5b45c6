//! Application-level utilities for the pwstore CLI.
//!
//! This module provides:
//! - The lazily-configured application context
//! - Path resolution for the config file and the store directory

mod context;
mod resolver;

pub use context::AppContext;
