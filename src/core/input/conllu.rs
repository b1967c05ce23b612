//! CoNLL-U reader
//!
//! Each blank-line separated block is one sentence. Token lines carry ten
//! tab-separated columns:
//! `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`.
//! Multiword ranges (`3-4`) and empty nodes (`5.1`) are skipped.

use super::AnnotatedDoc;
use crate::core::models::Token;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

const COLUMNS: usize = 10;
const EMPTY: &str = "_";

/// Parse CoNLL-U text into annotated documents, one per sentence
///
/// # Errors
/// Returns an error naming the line number of the first malformed token line
pub fn parse_conllu(content: &str) -> Result<Vec<AnnotatedDoc>> {
    let mut docs = Vec::new();
    let mut block = SentenceBlock::default();

    for (line_no, line) in content.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if let Some(doc) = block.finish() {
                docs.push(doc);
            }
            block = SentenceBlock::default();
        } else if let Some(comment) = line.strip_prefix('#') {
            block.comment(comment);
        } else {
            block
                .token_line(line)
                .map_err(|e| Error::parse(format!("line {line_no}: {e}")))?;
        }
    }
    if let Some(doc) = block.finish() {
        docs.push(doc);
    }

    crate::debug!("Parsed {} CoNLL-U sentences", docs.len());
    Ok(docs)
}

/// Read and parse a CoNLL-U file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_conllu_file<P: AsRef<Path>>(path: P) -> Result<Vec<AnnotatedDoc>> {
    let content = fs::read_to_string(path)?;
    parse_conllu(&content)
}

/// Lines of the sentence currently being read
#[derive(Default)]
struct SentenceBlock {
    text: Option<String>,
    tokens: Vec<Token>,
}

impl SentenceBlock {
    fn comment(&mut self, comment: &str) {
        if let Some((key, value)) = comment.split_once('=') {
            if key.trim() == "text" {
                self.text = Some(value.trim().to_string());
            }
        }
    }

    fn token_line(&mut self, line: &str) -> std::result::Result<(), String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMNS {
            return Err(format!(
                "expected {COLUMNS} tab-separated columns, found {}",
                fields.len()
            ));
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }
        let index = parse_id(id)?;
        let head = match fields[6] {
            "0" => index,
            raw => parse_id(raw).map_err(|e| format!("bad HEAD: {e}"))?,
        };

        let upos = non_empty(fields[3]);
        let xpos = non_empty(fields[4]);
        let tag = if xpos.is_empty() { upos } else { xpos };
        self.tokens.push(Token {
            index,
            text: fields[1].to_string(),
            pos: upos.to_string(),
            tag: tag.to_string(),
            dep: non_empty(fields[7]).to_string(),
            lemma: non_empty(fields[2]).to_string(),
            head,
            children: Vec::new(),
        });
        Ok(())
    }

    fn finish(self) -> Option<AnnotatedDoc> {
        if self.tokens.is_empty() {
            return None;
        }
        let text = self.text.unwrap_or_else(|| {
            self.tokens
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });
        let mut doc = AnnotatedDoc::new(&text, self.tokens);
        doc.link_children();
        Some(doc)
    }
}

/// Convert a 1-based CoNLL-U word id into a 0-based token index
fn parse_id(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(id) if id > 0 => Ok(id - 1),
        _ => Err(format!("invalid token id '{raw}'")),
    }
}

fn non_empty(field: &str) -> &str {
    if field == EMPTY {
        ""
    } else {
        field
    }
}
