//! External NLP pipeline boundary
//!
//! Annotation is delegated entirely to an outside pipeline. These traits are
//! the seam: a [`PipelineLoader`] turns a model name into a [`Pipeline`],
//! and a pipeline turns text into an [`AnnotatedDoc`].

pub mod command;
pub mod language;

pub use command::{CommandLoader, CommandPipeline};
pub use language::Language;

use crate::core::models::AnnotatedDoc;
use crate::error::Result;

/// Annotates raw text
pub trait Pipeline {
    /// Run the pipeline over one text
    ///
    /// # Errors
    /// Returns an error if the pipeline fails; callers propagate it unchanged
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc>;
}

/// Loads a pipeline by model name
pub trait PipelineLoader {
    /// Load the named model
    ///
    /// # Errors
    /// Returns an error if the model cannot be loaded
    fn load(&self, model: &str) -> Result<Box<dyn Pipeline>>;
}
