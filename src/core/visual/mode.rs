//! Visualization modes

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// What the rendered page highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tokens labelled by tag, with dependency arcs
    #[default]
    Dependency,
    /// Named-entity mentions labelled by entity type
    NamedEntity,
    /// Tokens labelled by tag, without arcs
    PartOfSpeech,
}

impl Mode {
    /// Whether arcs (and relation styles) are emitted
    #[must_use]
    pub const fn has_relations(self) -> bool {
        matches!(self, Self::Dependency)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dep" => Ok(Self::Dependency),
            "ner" => Ok(Self::NamedEntity),
            "pos" => Ok(Self::PartOfSpeech),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependency => write!(f, "dep"),
            Self::NamedEntity => write!(f, "ner"),
            Self::PartOfSpeech => write!(f, "pos"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_names() {
        assert_eq!("dep".parse::<Mode>().unwrap(), Mode::Dependency);
        assert_eq!("ner".parse::<Mode>().unwrap(), Mode::NamedEntity);
        assert_eq!("pos".parse::<Mode>().unwrap(), Mode::PartOfSpeech);
    }

    #[test]
    fn test_parse_is_exact() {
        for name in ["DEP", "Pos", " ner", "dependency", "named-entity", "part-of-speech"] {
            let err = name.parse::<Mode>().unwrap_err();
            assert!(matches!(err, Error::InvalidMode(ref m) if m == name));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "tree".parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::InvalidMode(ref m) if m == "tree"));
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [Mode::Dependency, Mode::NamedEntity, Mode::PartOfSpeech] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_only_dependency_has_relations() {
        assert!(Mode::Dependency.has_relations());
        assert!(!Mode::NamedEntity.has_relations());
        assert!(!Mode::PartOfSpeech.has_relations());
    }
}
