//! Core rendering functionality

pub mod colors;
pub mod input;
pub mod models;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod visual;

/// Returns the current version of the `bratviz` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
