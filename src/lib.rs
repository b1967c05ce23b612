//! `bratviz`: render NLP pipeline annotations as brat visualization pages
//!
//! Tokens, dependency arcs and named entities produced by an external
//! pipeline are converted into brat's `docData`/`collData` structures and
//! embedded in a self-contained HTML page.

pub mod config;
pub mod core;
pub mod error;
pub mod logger;

pub use crate::core::get_version;
pub use crate::core::render::{render_sentences, render_texts, RenderOptions};
pub use error::{Error, Result};
