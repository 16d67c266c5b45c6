//! UI primitives for the pwstore CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens, styles, strength colors
//! - **Render**: Headers, receipts, hints, entry tables and detail views
//! - **Format**: String utilities (truncate, mask, relative dates)
//! - **Prompt**: dialoguer prompts for secrets, text and menus

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, blank_line, divider, header, hint, kv, print_error, receipt};
