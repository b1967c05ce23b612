//! CLI command handlers for `bratviz`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod render;
