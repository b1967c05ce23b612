//! JSON annotation reader

use super::AnnotatedDoc;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Either one document or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<AnnotatedDoc>),
    One(AnnotatedDoc),
}

/// Parse a JSON annotation: a single document object or an array of them
///
/// # Errors
/// Returns an error if the JSON does not match the annotation shape
pub fn parse_annotations(json: &str) -> Result<Vec<AnnotatedDoc>> {
    let parsed: OneOrMany = serde_json::from_str(json)
        .map_err(|e| Error::parse(format!("invalid annotation JSON: {e}")))?;
    Ok(match parsed {
        OneOrMany::Many(docs) => docs,
        OneOrMany::One(doc) => vec![doc],
    })
}

/// Read and parse a JSON annotation file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_annotations_file<P: AsRef<Path>>(path: P) -> Result<Vec<AnnotatedDoc>> {
    let content = fs::read_to_string(path)?;
    parse_annotations(&content)
}
