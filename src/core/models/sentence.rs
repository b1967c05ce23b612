//! Sentence model and the annotated-sentence contract

use super::{NamedEntity, Token};
use serde::{Deserialize, Serialize};

/// What an external pipeline must supply for one annotated sentence
///
/// Tokens may come back in any order; [`Sentence::extract`] re-sorts them.
pub trait AnnotatedSentence {
    /// Original sentence text
    fn text(&self) -> &str;

    /// Tokens in the pipeline's iteration order
    fn tokens(&self) -> Vec<Token>;

    /// Recognized named entities, in the pipeline's order
    fn entities(&self) -> Vec<NamedEntity> {
        Vec::new()
    }
}

/// An annotated sentence with tokens sorted by index
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sentence {
    /// Original sentence text
    pub text: String,
    /// Tokens ordered by `index`
    pub tokens: Vec<Token>,
    /// Named entities in pipeline order
    pub entities: Vec<NamedEntity>,
}

impl Sentence {
    /// Build a sentence record from a pipeline result
    #[must_use]
    pub fn extract(annotated: &impl AnnotatedSentence) -> Self {
        let mut tokens = annotated.tokens();
        tokens.sort_by_key(|token| token.index);
        Self {
            text: annotated.text().to_string(),
            tokens,
            entities: annotated.entities(),
        }
    }

    /// Token texts joined by single spaces
    ///
    /// Entity offsets index into this string, not into `text`.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
