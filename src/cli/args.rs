//! CLI argument definitions for `bratviz`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bratviz::config::ConfigOverrides;
use bratviz::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `command`, `mode`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Where the documents of a `render` call come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderInputs {
    /// Raw texts given on the command line
    pub texts: Vec<String>,
    /// File with one raw text per line
    pub input: Option<PathBuf>,
    /// Pre-annotated JSON file
    pub annotations: Option<PathBuf>,
    /// Pre-annotated CoNLL-U file
    pub conllu: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Render texts as a brat visualization page.
    ///
    /// Raw texts are annotated by the configured pipeline command. Use
    /// --annotations or --conllu to render already-annotated sentences.
    Render {
        /// Texts to annotate (one document each)
        #[arg(value_name = "TEXTS")]
        texts: Vec<String>,

        /// Read texts from a file, one document per non-empty line
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Render pre-annotated JSON (one document or an array)
        #[arg(long, value_name = "FILE", conflicts_with_all = ["texts", "input", "conllu"])]
        annotations: Option<PathBuf>,

        /// Render pre-annotated CoNLL-U sentences
        #[arg(long, value_name = "FILE", conflicts_with_all = ["texts", "input"])]
        conllu: Option<PathBuf>,

        /// Output HTML file (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Language code: en, zh, ja, de, fr (others fall back to en)
        #[arg(long, value_name = "CODE")]
        lang: Option<String>,

        /// Visualization mode: dep, ner or pos
        #[arg(short, long, value_name = "MODE")]
        mode: Option<String>,

        /// Document id to use instead of generated UUIDs
        #[arg(long, value_name = "ID")]
        id: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "bratviz",
    about = "Render NLP annotations as brat visualization pages",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the pipeline command for this run
    #[arg(long = "pipeline-command", value_name = "PROGRAM")]
    pub pipeline_command: Option<String>,

    /// Override the brat client location for this run
    #[arg(long = "brat-location", value_name = "URL")]
    pub brat_location: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            command: self.pipeline_command.clone(),
            brat_location: self.brat_location.clone(),
        }
    }
}
