//! HTML page assembly
//!
//! A [`Page`] collects one `(docData, collData)` pair per document and
//! renders them into a single self-contained page. The page loads the brat
//! client from `brat_location`; each document gets its own key in the shared
//! `collData`/`docData` objects and its own container `<div>`.

use crate::core::visual::{CollData, DocData};
use crate::error::Result;
use askama::Template;
use serde::Serialize;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// brat v1.3 client on the jsDelivr CDN
pub const DEFAULT_BRAT_LOCATION: &str = "https://cdn.jsdelivr.net/gh/nlplab/brat@v1.3_Crunchy_Frog";

/// One document on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    /// Container id and key in the shared data objects
    pub id: String,
    /// Document payload
    pub doc: DocData,
    /// Style collection
    pub coll: CollData,
}

/// Accumulates documents and renders them as one HTML page
#[derive(Debug, Clone)]
pub struct Page {
    brat_location: String,
    documents: Vec<PageDocument>,
}

/// Template view of one document, with JSON already serialized
struct DocumentBlock {
    id: String,
    id_json: String,
    coll_json: String,
    doc_json: String,
}

#[derive(Template)]
#[template(path = "brat_page.html")]
struct PageTemplate<'a> {
    brat_location: &'a str,
    brat_location_json: String,
    documents: Vec<DocumentBlock>,
}

impl Page {
    /// Create an empty page loading brat from `brat_location`
    #[must_use]
    pub fn new(brat_location: &str) -> Self {
        Self {
            brat_location: brat_location.trim_end_matches('/').to_string(),
            documents: Vec::new(),
        }
    }

    /// Add a document under `id`, or under a fresh UUID when `id` is `None`
    ///
    /// Returns the id used. Reusing an id is allowed but the documents then
    /// share one key and one container id, so only the last renders.
    pub fn add_document(&mut self, id: Option<String>, doc: DocData, coll: CollData) -> String {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.documents.iter().any(|existing| existing.id == id) {
            crate::warn!("Document id '{id}' is already on the page; the later document overwrites it");
        }
        self.documents.push(PageDocument {
            id: id.clone(),
            doc,
            coll,
        });
        id
    }

    /// Documents in insertion order
    #[must_use]
    pub fn documents(&self) -> &[PageDocument] {
        &self.documents
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Render the page
    ///
    /// # Errors
    /// Returns an error if serialization or templating fails
    pub fn render(&self) -> Result<String> {
        let documents = self
            .documents
            .iter()
            .map(|document| {
                Ok(DocumentBlock {
                    id: document.id.clone(),
                    id_json: script_json(&document.id)?,
                    coll_json: script_json(&document.coll)?,
                    doc_json: script_json(&document.doc)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let template = PageTemplate {
            brat_location: &self.brat_location,
            brat_location_json: script_json(&self.brat_location)?,
            documents,
        };
        Ok(template.render()?)
    }

    /// Render the page, write it to `output_path` and return it
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    pub fn generate(&self, output_path: &Path) -> Result<String> {
        let html = self.render()?;
        fs::write(output_path, &html)?;
        crate::info!(
            "Wrote {} document(s) to {}",
            self.documents.len(),
            output_path.display()
        );
        Ok(html)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_BRAT_LOCATION)
    }
}

/// Serialize to JSON that is safe inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::visual::{EntitySpan, EntityType};

    fn sample() -> (DocData, CollData) {
        let mut doc = DocData::new("Hi".to_string());
        doc.entities.push(EntitySpan::new(0, "UH", 0, 2));
        let mut coll = CollData::entities_only();
        coll.add_entity_type(EntityType::new("UH", "#E3E3E3"));
        (doc, coll)
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut page = Page::default();
        let (doc, coll) = sample();
        let first = page.add_document(None, doc.clone(), coll.clone());
        let second = page.add_document(None, doc, coll);

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_pinned_id_is_kept() {
        let mut page = Page::default();
        let (doc, coll) = sample();
        let id = page.add_document(Some("cats".to_string()), doc, coll);

        assert_eq!(id, "cats");
        assert_eq!(page.documents()[0].id, "cats");
    }

    #[test]
    fn test_render_contains_header_and_block() {
        let mut page = Page::default();
        let (doc, coll) = sample();
        page.add_document(Some("doc-1".to_string()), doc, coll);

        let html = page.render().expect("page renders");

        assert!(html.contains("var collData = {};"));
        assert!(html.contains("var docData = {};"));
        assert!(html.contains("style-vis.css"));
        assert!(html.contains(&format!("var bratLocation = \"{DEFAULT_BRAT_LOCATION}\";")));
        assert!(html.contains(r#"collData["doc-1"] = {"entity_types":[{"type":"UH""#));
        assert!(html.contains(r#"docData["doc-1"] = {"entities":[["T0","UH",[[0,2]]]],"relations":[],"text":"Hi"};"#));
        assert!(html.contains(r#"Util.embed("doc-1""#));
        assert!(html.contains(r#"<div id="doc-1"></div>"#));
    }

    #[test]
    fn test_render_escapes_script_end_tags() {
        let mut page = Page::default();
        let doc = DocData::new("a </script> b".to_string());
        page.add_document(Some("x".to_string()), doc, CollData::entities_only());

        let html = page.render().expect("page renders");

        assert!(html.contains(r#""text":"a <\/script> b""#));
        assert_eq!(html.matches("</script>").count(), 3);
    }

    #[test]
    fn test_custom_location_trims_slash() {
        let page = Page::new("http://localhost:8001/brat/");
        let html = page.render().expect("empty page renders");

        assert!(html.contains(r#"var bratLocation = "http://localhost:8001/brat";"#));
        assert!(!html.contains("<div id="));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("page.html");
        let mut page = Page::default();
        let (doc, coll) = sample();
        page.add_document(None, doc, coll);

        let html = page.generate(&path).expect("page written");

        assert_eq!(fs::read_to_string(&path).expect("file exists"), html);
    }

    #[test]
    fn test_generate_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("page.html");
        let page = Page::default();

        assert!(matches!(page.generate(&path), Err(crate::Error::Io(_))));
    }
}
