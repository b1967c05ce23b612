//! Token model

use serde::{Deserialize, Serialize};

/// One token of an annotated sentence, as produced by the external pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Zero-based position in the sentence
    #[serde(rename = "i", alias = "idx", alias = "index")]
    pub index: usize,

    /// Surface text
    pub text: String,

    /// Coarse part-of-speech tag (e.g., "NOUN")
    #[serde(default)]
    pub pos: String,

    /// Fine-grained tag (e.g., "NNS")
    #[serde(default)]
    pub tag: String,

    /// Dependency label linking this token to its head (e.g., "nsubj")
    #[serde(default)]
    pub dep: String,

    /// Lemma
    #[serde(default)]
    pub lemma: String,

    /// Index of the syntactic head; equals `index` at the root
    pub head: usize,

    /// Indices of the syntactic children
    #[serde(default)]
    pub children: Vec<usize>,
}

impl Token {
    /// Create a token with empty lemma and no children
    #[must_use]
    pub fn new(index: usize, text: &str, tag: &str, dep: &str, head: usize) -> Self {
        Self {
            index,
            text: text.to_string(),
            pos: String::new(),
            tag: tag.to_string(),
            dep: dep.to_string(),
            lemma: String::new(),
            head,
            children: Vec::new(),
        }
    }

    /// Whether this token is a syntactic root (its own head)
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.head == self.index
    }

    /// Length of the surface text in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Add a child index
    pub fn add_child(&mut self, child: usize) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}
