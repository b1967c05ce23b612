//! Serialized form of a pipeline annotation
//!
//! This is the JSON shape external annotators emit and pre-annotated input
//! files contain:
//!
//! ```json
//! {"text": "Cats run",
//!  "tokens": [{"i": 0, "text": "Cats", "pos": "NOUN", "tag": "NNS",
//!              "dep": "nsubj", "lemma": "cat", "head": 1, "children": []}],
//!  "ents": [{"text": "Cats", "label": "MISC"}]}
//! ```

use super::{AnnotatedSentence, NamedEntity, Token};
use serde::{Deserialize, Serialize};

/// A sentence annotated by an external pipeline
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    /// Original text
    pub text: String,
    /// Tokens in pipeline order
    pub tokens: Vec<Token>,
    /// Named entities in pipeline order
    #[serde(default, rename = "ents", alias = "entities")]
    pub entities: Vec<NamedEntity>,
}

impl AnnotatedDoc {
    /// Create a document with no named entities
    #[must_use]
    pub fn new(text: &str, tokens: Vec<Token>) -> Self {
        Self {
            text: text.to_string(),
            tokens,
            entities: Vec::new(),
        }
    }

    /// Attach named entities
    #[must_use]
    pub fn with_entities(mut self, entities: Vec<NamedEntity>) -> Self {
        self.entities = entities;
        self
    }

    /// Fill each token's `children` from the other tokens' heads
    ///
    /// Roots (tokens that are their own head) are never recorded as their
    /// own child.
    pub fn link_children(&mut self) {
        let links: Vec<(usize, usize)> = self
            .tokens
            .iter()
            .filter(|token| !token.is_root())
            .map(|token| (token.head, token.index))
            .collect();
        for (head, child) in links {
            if let Some(parent) = self.tokens.iter_mut().find(|t| t.index == head) {
                parent.add_child(child);
            }
        }
    }
}

impl AnnotatedSentence for AnnotatedDoc {
    fn text(&self) -> &str {
        &self.text
    }

    fn tokens(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    fn entities(&self) -> Vec<NamedEntity> {
        self.entities.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pipeline_output() {
        let json = r#"{
            "text": "Ada Lovelace wrote",
            "tokens": [
                {"i": 0, "text": "Ada", "pos": "PROPN", "tag": "NNP", "dep": "compound", "lemma": "Ada", "head": 1, "children": []},
                {"i": 1, "text": "Lovelace", "pos": "PROPN", "tag": "NNP", "dep": "nsubj", "lemma": "Lovelace", "head": 2, "children": [0]},
                {"i": 2, "text": "wrote", "pos": "VERB", "tag": "VBD", "dep": "ROOT", "lemma": "write", "head": 2, "children": [1]}
            ],
            "ents": [{"text": "Ada Lovelace", "label": "PERSON"}]
        }"#;

        let doc: AnnotatedDoc = serde_json::from_str(json).expect("valid pipeline output");

        assert_eq!(doc.tokens.len(), 3);
        assert_eq!(doc.tokens[2].lemma, "write");
        assert_eq!(doc.entities, vec![NamedEntity::new("Ada Lovelace", "PERSON")]);
    }

    #[test]
    fn test_entities_are_optional() {
        let json = r#"{"text": "Hi", "tokens": [{"i": 0, "text": "Hi", "head": 0}]}"#;
        let doc: AnnotatedDoc = serde_json::from_str(json).expect("minimal doc");
        assert!(doc.entities.is_empty());
        assert!(doc.tokens[0].is_root());
    }

    #[test]
    fn test_link_children() {
        let mut doc = AnnotatedDoc::new(
            "Cats run fast",
            vec![
                Token::new(0, "Cats", "NNS", "nsubj", 1),
                Token::new(1, "run", "VBP", "ROOT", 1),
                Token::new(2, "fast", "RB", "advmod", 1),
            ],
        );

        doc.link_children();

        assert_eq!(doc.tokens[1].children, vec![0, 2]);
        assert!(doc.tokens[0].children.is_empty());
        assert!(doc.tokens[2].children.is_empty());
    }
}
