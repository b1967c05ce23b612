//! End-to-end rendering: text in, brat page out

use crate::core::models::{AnnotatedSentence, Sentence};
use crate::core::page::{Page, DEFAULT_BRAT_LOCATION};
use crate::core::pipeline::{Language, PipelineLoader};
use crate::core::visual::{Mode, VisualBuilder};
use crate::error::Result;
use std::path::PathBuf;

/// Options shared by every document rendered in one call
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Language whose pipeline model annotates the texts
    pub lang: Language,
    /// Visualization mode
    pub mode: Mode,
    /// Id for every document; a fresh UUID per document when `None`
    pub id: Option<String>,
    /// Also write the page here
    pub save_path: Option<PathBuf>,
    /// Base URL of the brat client
    pub brat_location: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: Language::English,
            mode: Mode::Dependency,
            id: None,
            save_path: None,
            brat_location: DEFAULT_BRAT_LOCATION.to_string(),
        }
    }
}

impl RenderOptions {
    /// Default options with the given mode
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Annotate `texts` with the language's pipeline and render them as one page
///
/// Texts are processed in order and appear on the page in that order.
///
/// # Errors
/// Returns the pipeline's error unchanged if loading or annotation fails,
/// and IO errors from writing `save_path`
pub fn render_texts<S: AsRef<str>>(
    loader: &dyn PipelineLoader,
    texts: &[S],
    options: &RenderOptions,
) -> Result<String> {
    let model = options.lang.model_name();
    crate::info!("Loading pipeline model {model} for '{}'", options.lang);
    let pipeline = loader.load(model)?;

    let mut sentences = Vec::with_capacity(texts.len());
    for (n, text) in texts.iter().enumerate() {
        crate::verbose!("Annotating text {}/{}", n + 1, texts.len());
        let annotated = pipeline.annotate(text.as_ref())?;
        sentences.push(Sentence::extract(&annotated));
    }

    assemble(&sentences, options)
}

/// Render already-annotated sentences as one page
///
/// # Errors
/// Returns IO errors from writing `save_path`, or serialization errors
pub fn render_sentences<A: AnnotatedSentence>(
    annotated: &[A],
    options: &RenderOptions,
) -> Result<String> {
    let sentences: Vec<Sentence> = annotated.iter().map(Sentence::extract).collect();
    assemble(&sentences, options)
}

fn assemble(sentences: &[Sentence], options: &RenderOptions) -> Result<String> {
    let mut page = Page::new(&options.brat_location);
    for sentence in sentences {
        let (doc, coll) = VisualBuilder::build(sentence, options.mode);
        let id = page.add_document(options.id.clone(), doc, coll);
        crate::debug!("Added document {id} ({} tokens)", sentence.len());
    }

    match &options.save_path {
        Some(path) => page.generate(path),
        None => page.render(),
    }
}
