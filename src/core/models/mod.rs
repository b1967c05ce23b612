//! Data models for `bratviz`

pub mod annotated;
pub mod entity;
pub mod sentence;
pub mod token;

pub use annotated::AnnotatedDoc;
pub use entity::NamedEntity;
pub use sentence::{AnnotatedSentence, Sentence};
pub use token::Token;
