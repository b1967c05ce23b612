//! Render command handler
//!
//! Builds a brat page from raw texts (through the configured pipeline
//! command) or from pre-annotated JSON / CoNLL-U files.

use crate::args::RenderInputs;
use bratviz::config::Config;
use bratviz::core::input::{parse_annotations_file, parse_conllu_file};
use bratviz::core::page::DEFAULT_BRAT_LOCATION;
use bratviz::core::pipeline::{CommandLoader, Language};
use bratviz::core::visual::Mode;
use bratviz::{error, info, render_sentences, render_texts, Error, RenderOptions, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// Per-invocation render settings; `None` falls back to config
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    /// Output HTML file
    pub output: Option<PathBuf>,
    /// Language code
    pub lang: Option<String>,
    /// Visualization mode name
    pub mode: Option<String>,
    /// Pinned document id
    pub id: Option<String>,
}

/// Run the render command.
pub fn run(inputs: &RenderInputs, request: RenderRequest, config: &Config) -> ExitCode {
    let to_stdout = request.output.is_none();
    match render(inputs, request, config) {
        Ok(html) => {
            if to_stdout {
                print!("{html}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Render failed: {err}");
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}

fn render(inputs: &RenderInputs, request: RenderRequest, config: &Config) -> Result<String> {
    let options = resolve_options(request, config)?;

    let html = if let Some(path) = &inputs.annotations {
        let docs = parse_annotations_file(path)?;
        info!("Loaded {} annotated document(s) from {}", docs.len(), path.display());
        render_sentences(&docs, &options)?
    } else if let Some(path) = &inputs.conllu {
        let docs = parse_conllu_file(path)?;
        info!("Loaded {} CoNLL-U sentence(s) from {}", docs.len(), path.display());
        render_sentences(&docs, &options)?
    } else {
        let texts = collect_texts(inputs)?;
        let loader = CommandLoader::new(
            config.pipeline.command.clone(),
            config.pipeline.args.clone(),
        );
        render_texts(&loader, &texts, &options)?
    };

    if let Some(path) = &options.save_path {
        println!("✓ Page written: {}", path.display());
    }
    Ok(html)
}

/// Merge command-line settings with config defaults
///
/// The mode is validated here so an invalid value fails before any input
/// is read or any pipeline is started.
fn resolve_options(request: RenderRequest, config: &Config) -> Result<RenderOptions> {
    let mode = match request.mode.as_deref() {
        Some(mode) => Mode::from_str(mode)?,
        None if config.render.mode.is_empty() => Mode::default(),
        None => Mode::from_str(&config.render.mode)?,
    };
    let lang = Language::from_code(request.lang.as_deref().unwrap_or(&config.render.lang));
    let brat_location = if config.render.brat_location.is_empty() {
        DEFAULT_BRAT_LOCATION.to_string()
    } else {
        config.render.brat_location.clone()
    };

    Ok(RenderOptions {
        lang,
        mode,
        id: request.id,
        save_path: request.output,
        brat_location,
    })
}

/// Texts from the command line followed by the non-empty lines of `--input`
fn collect_texts(inputs: &RenderInputs) -> Result<Vec<String>> {
    let mut texts = inputs.texts.clone();
    if let Some(path) = &inputs.input {
        let content = fs::read_to_string(path)?;
        texts.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    if texts.is_empty() {
        return Err(Error::parse(
            "no input: pass TEXTS, --input, --annotations or --conllu",
        ));
    }
    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_options_uses_config_defaults() {
        let mut config = Config::from_defaults();
        config.render.lang = "fr".to_string();
        config.render.mode = "ner".to_string();

        let options = resolve_options(RenderRequest::default(), &config).expect("valid config");

        assert_eq!(options.lang, Language::French);
        assert_eq!(options.mode, Mode::NamedEntity);
        assert!(options.id.is_none());
        assert!(options.save_path.is_none());
    }

    #[test]
    fn test_resolve_options_request_wins() {
        let config = Config::from_defaults();
        let request = RenderRequest {
            output: Some(PathBuf::from("page.html")),
            lang: Some("xx".to_string()),
            mode: Some("pos".to_string()),
            id: Some("fixed".to_string()),
        };

        let options = resolve_options(request, &config).expect("valid request");

        assert_eq!(options.lang, Language::English);
        assert_eq!(options.mode, Mode::PartOfSpeech);
        assert_eq!(options.id.as_deref(), Some("fixed"));
        assert_eq!(options.save_path, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn test_resolve_options_rejects_bad_mode() {
        let config = Config::from_defaults();
        let request = RenderRequest {
            mode: Some("tree".to_string()),
            ..RenderRequest::default()
        };

        assert!(matches!(
            resolve_options(request, &config),
            Err(Error::InvalidMode(_))
        ));
    }

    #[test]
    fn test_collect_texts_from_args_and_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("texts.txt");
        fs::write(&path, "Dogs bark.\n\n  Birds sing.  \n").expect("write texts");

        let inputs = RenderInputs {
            texts: vec!["Cats run.".to_string()],
            input: Some(path),
            ..RenderInputs::default()
        };

        let texts = collect_texts(&inputs).expect("texts collected");
        assert_eq!(texts, vec!["Cats run.", "Dogs bark.", "Birds sing."]);
    }

    #[test]
    fn test_collect_texts_requires_input() {
        assert!(collect_texts(&RenderInputs::default()).is_err());
    }
}
