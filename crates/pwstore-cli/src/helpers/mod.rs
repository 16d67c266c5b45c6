//! Input helpers shared by commands.

pub mod input;
