//! Language codes and the pipeline models they select

use std::fmt;

/// Languages with a known pipeline model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Chinese
    Chinese,
    /// Japanese
    Japanese,
    /// German
    German,
    /// French
    French,
}

impl Language {
    /// Resolve a language code; unknown codes fall back to English
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Self::Chinese,
            "ja" => Self::Japanese,
            "de" => Self::German,
            "fr" => Self::French,
            _ => Self::English,
        }
    }

    /// Two-letter code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::German => "de",
            Self::French => "fr",
        }
    }

    /// Name of the pipeline model to load for this language
    #[must_use]
    pub const fn model_name(self) -> &'static str {
        match self {
            Self::English => "en_core_web_lg",
            Self::Chinese => "zh_core_web_lg",
            Self::Japanese => "ja_core_news_lg",
            Self::German => "de_core_news_lg",
            Self::French => "fr_core_news_lg",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
