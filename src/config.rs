//! Configuration module for `bratviz`

use crate::core::visual::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$BRATVIZ";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// External NLP pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Program invoked once per text
    #[serde(default)]
    pub command: String,
    /// Program arguments; `{model}` is replaced by the resolved model name
    #[serde(default)]
    pub args: Vec<String>,
}

/// Page rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Default language code (en, zh, ja, de, fr)
    #[serde(default)]
    pub lang: String,
    /// Default visualization mode (dep, ner, pos)
    #[serde(default)]
    pub mode: String,
    /// Base URL the brat client is loaded from
    #[serde(default)]
    pub brat_location: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override pipeline command
    pub command: Option<String>,
    /// Override brat client location
    pub brat_location: Option<String>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not.
fn fill_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$BRATVIZ` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/bratviz`
    /// - macOS: `~/Library/Application Support/bratviz`
    /// - Windows: `%APPDATA%\bratviz`
    #[must_use]
    pub fn get_bratviz_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bratviz")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated, so upgrading adds new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        changed |= fill_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_empty(&mut self.logging.file, &defaults.logging.file);

        changed |= fill_empty(&mut self.pipeline.command, &defaults.pipeline.command);
        if self.pipeline.args.is_empty() && !defaults.pipeline.args.is_empty() {
            self.pipeline.args.clone_from(&defaults.pipeline.args);
            changed = true;
        }

        changed |= fill_empty(&mut self.render.lang, &defaults.render.lang);
        changed |= fill_empty(&mut self.render.mode, &defaults.render.mode);
        changed |= fill_empty(
            &mut self.render.brat_location,
            &defaults.render.brat_location,
        );

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for a single run; the config file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(command) = &overrides.command {
            self.pipeline.command.clone_from(command);
        }
        if let Some(location) = &overrides.brat_location {
            self.render.brat_location.clone_from(location);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_bratviz_dir`].
    ///
    /// [`get_bratviz_dir`]: Self::get_bratviz_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_bratviz_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$BRATVIZ` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_bratviz_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, `false`,
    /// empty lists). Path-like values have `$BRATVIZ` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.pipeline.command = Self::expand_variables(&config.pipeline.command);
        config.pipeline.args = config
            .pipeline
            .args
            .iter()
            .map(|arg| Self::expand_variables(arg))
            .collect();

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// Existing files have missing fields merged from defaults and are
    /// re-saved. Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(e) => {
                crate::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `command`, `args`,
    /// `lang`, `mode`, `brat_location`. `args` is shown space-separated.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "command" => Some(self.pipeline.command.clone()),
            "args" => Some(self.pipeline.args.join(" ")),
            "lang" => Some(self.render.lang.clone()),
            "mode" => Some(self.render.mode.clone()),
            "brat_location" => Some(self.render.brat_location.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "command" => self.pipeline.command = value.to_string(),
            "args" => {
                self.pipeline.args = value.split_whitespace().map(str::to_string).collect();
            }
            "lang" => self.render.lang = value.to_string(),
            "mode" => {
                let mode = Mode::from_str(value).map_err(|e| e.to_string())?;
                self.render.mode = mode.to_string();
            }
            "brat_location" => self.render.brat_location = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "command" => self.pipeline.command.clone_from(&defaults.pipeline.command),
            "args" => self.pipeline.args.clone_from(&defaults.pipeline.args),
            "lang" => self.render.lang.clone_from(&defaults.render.lang),
            "mode" => self.render.mode.clone_from(&defaults.render.mode),
            "brat_location" => self
                .render
                .brat_location
                .clone_from(&defaults.render.brat_location),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by removing the config file
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[pipeline]")?;
        writeln!(f, "  command = \"{}\"", self.pipeline.command)?;
        writeln!(f, "  args = {:?}", self.pipeline.args)?;

        writeln!(f, "\n[render]")?;
        writeln!(f, "  lang = \"{}\"", self.render.lang)?;
        writeln!(f, "  mode = \"{}\"", self.render.mode)?;
        writeln!(f, "  brat_location = \"{}\"", self.render.brat_location)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_empty() {
        let mut field = String::new();
        assert!(fill_empty(&mut field, "dep"));
        assert_eq!(field, "dep");
        assert!(!fill_empty(&mut field, "ner"));
        assert_eq!(field, "dep");
    }

    #[test]
    fn test_set_mode_validates() {
        let mut config = Config::from_defaults();
        config.set("mode", "pos").expect("pos is a valid mode");
        assert_eq!(config.render.mode, "pos");
        assert!(config.set("mode", "tree").is_err());
        assert!(config.set("mode", "NER").is_err());
        assert_eq!(config.render.mode, "pos");
    }

    #[test]
    fn test_set_args_splits_on_whitespace() {
        let mut config = Config::from_defaults();
        config
            .set("args", "-m  my_annotator {model}")
            .expect("args accepts any value");
        assert_eq!(config.pipeline.args, vec!["-m", "my_annotator", "{model}"]);
        assert_eq!(config.get("args").unwrap(), "-m my_annotator {model}");
    }
}
