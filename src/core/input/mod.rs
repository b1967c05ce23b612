//! Readers for already-annotated input
//!
//! These bypass the external pipeline: sentences parsed by some other tool
//! are loaded straight into [`AnnotatedDoc`]s.

pub mod conllu;
pub mod json;

pub use conllu::{parse_conllu, parse_conllu_file};
pub use json::{parse_annotations, parse_annotations_file};

use crate::core::models::AnnotatedDoc;
