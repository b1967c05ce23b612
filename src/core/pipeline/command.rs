//! Pipeline backed by an external annotator process
//!
//! The configured program is run once per text. The text is written to its
//! stdin and a single JSON [`AnnotatedDoc`] is expected on stdout. The model
//! name replaces `{model}` in the arguments and is also exported as
//! `BRATVIZ_MODEL`.

use super::{Pipeline, PipelineLoader};
use crate::core::models::AnnotatedDoc;
use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Placeholder replaced by the model name in configured arguments
pub const MODEL_PLACEHOLDER: &str = "{model}";

/// Environment variable carrying the model name to the annotator
pub const MODEL_ENV: &str = "BRATVIZ_MODEL";

/// Loads [`CommandPipeline`]s for a configured program
#[derive(Debug, Clone)]
pub struct CommandLoader {
    program: String,
    args: Vec<String>,
}

impl CommandLoader {
    /// Create a loader for `program` with argument templates `args`
    #[must_use]
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl PipelineLoader for CommandLoader {
    fn load(&self, model: &str) -> Result<Box<dyn Pipeline>> {
        if self.program.trim().is_empty() {
            return Err(Error::pipeline(
                "no pipeline command configured (set it with `bratviz config set command <PROGRAM>`)",
            ));
        }
        crate::info!("Using pipeline '{}' with model {model}", self.program);
        Ok(Box::new(CommandPipeline::new(&self.program, &self.args, model)))
    }
}

/// One external annotator bound to a model
#[derive(Debug, Clone)]
pub struct CommandPipeline {
    program: String,
    args: Vec<String>,
    model: String,
}

impl CommandPipeline {
    /// Bind `program` to `model`, substituting `{model}` in `args`
    #[must_use]
    pub fn new(program: &str, args: &[String], model: &str) -> Self {
        Self {
            program: program.to_string(),
            args: args
                .iter()
                .map(|arg| arg.replace(MODEL_PLACEHOLDER, model))
                .collect(),
            model: model.to_string(),
        }
    }

    /// Arguments after placeholder substitution
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Pipeline for CommandPipeline {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(MODEL_ENV, &self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::pipeline(format!("failed to start '{}': {e}", self.program)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::pipeline("annotator stdin unavailable"))?;
        let input = text.to_string();
        // Feed stdin from a separate thread so a chatty annotator cannot
        // block on a full stdout pipe while we are still writing.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| Error::pipeline("annotator input thread panicked"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::pipeline(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        // An annotator may legitimately stop reading early
        if let Err(e) = written {
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(Error::pipeline(format!(
                    "failed to send text to annotator: {e}"
                )));
            }
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::pipeline(format!("unreadable annotator output: {e}")))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const CATS_RUN: &str = r#"{"text": "Cats run", "tokens": [
        {"i": 0, "text": "Cats", "tag": "NNS", "dep": "nsubj", "head": 1},
        {"i": 1, "text": "run", "tag": "VBP", "dep": "ROOT", "head": 1}]}"#;

    #[test]
    fn test_placeholder_substitution() {
        let pipeline = CommandPipeline::new(
            "annotate",
            &["--model".to_string(), "{model}".to_string()],
            "de_core_news_lg",
        );
        assert_eq!(pipeline.args(), ["--model", "de_core_news_lg"]);
    }

    #[test]
    fn test_reads_json_from_stdout() {
        // `cat` echoes the text back, so the text itself is the annotation
        let pipeline = CommandPipeline::new("cat", &[], "en_core_web_lg");
        let doc = pipeline.annotate(CATS_RUN).expect("cat echoes valid JSON");

        assert_eq!(doc.text, "Cats run");
        assert_eq!(doc.tokens.len(), 2);
    }

    #[test]
    fn test_model_reaches_arguments() {
        let args = vec![r#"{"text": "{model}", "tokens": []}"#.to_string()];
        let pipeline = CommandPipeline::new("echo", &args, "fr_core_news_lg");
        let doc = pipeline.annotate("ignored").expect("echo prints JSON");

        assert_eq!(doc.text, "fr_core_news_lg");
    }

    #[test]
    fn test_failing_command() {
        let pipeline = CommandPipeline::new("false", &[], "en_core_web_lg");
        let err = pipeline.annotate("Cats run").unwrap_err();
        assert!(matches!(err, Error::Pipeline(_)));
    }

    #[test]
    fn test_missing_program() {
        let pipeline = CommandPipeline::new("bratviz-no-such-annotator", &[], "en_core_web_lg");
        let err = pipeline.annotate("Cats run").unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }

    #[test]
    fn test_unparsable_output() {
        let pipeline = CommandPipeline::new("cat", &[], "en_core_web_lg");
        let err = pipeline.annotate("not json").unwrap_err();
        assert!(err.to_string().contains("unreadable annotator output"));
    }

    #[test]
    fn test_loader_requires_command() {
        let loader = CommandLoader::new("  ".to_string(), Vec::new());
        assert!(matches!(loader.load("en_core_web_lg"), Err(Error::Pipeline(_))));
    }
}
