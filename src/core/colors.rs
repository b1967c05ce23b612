//! Tag-to-color tables
//!
//! Both tables follow the CoreNLP brat demo palette. Lookups are total:
//! anything unrecognized gets [`DEFAULT_COLOR`].

/// Color for tags no rule matches
pub const DEFAULT_COLOR: &str = "#E3E3E3";

/// Background color for a part-of-speech tag
///
/// Rules are prefix based and checked in order; the first match wins.
#[must_use]
pub fn pos_color(tag: &str) -> &'static str {
    if tag.starts_with('N') {
        "#A4BCED"
    } else if tag.starts_with('V') || tag.starts_with('M') {
        "#ADF6A2"
    } else if tag.starts_with('P') {
        "#CCDAF6"
    } else if tag.starts_with('I') {
        "#FFE8BE"
    } else if tag.starts_with('R') || tag.starts_with('W') {
        "#FFFDA8"
    } else if tag.starts_with('D') || tag == "CD" {
        "#CCADF6"
    } else if tag.starts_with('J') {
        "#FFFDA8"
    } else if tag.starts_with('T') {
        "#FFE8BE"
    } else if tag.starts_with('E') || tag.starts_with('S') {
        "#E4CBF6"
    } else if tag.starts_with("CC") || tag == "LS" || tag == "FW" {
        "#FFFFFF"
    } else {
        DEFAULT_COLOR
    }
}

/// Background color for a named-entity type (exact match)
#[must_use]
pub fn ner_color(label: &str) -> &'static str {
    match label {
        "PERSON" => "#FFCCAA",
        "ORGANIZATION" => "#8FB2FF",
        "MISC" => "#F1F447",
        "LOCATION" | "COUNTRY" | "STATE_OR_PROVINCE" | "CITY" => "#95DFFF",
        "DATE" | "TIME" | "DURATION" | "SET" => "#9AFFE6",
        "MONEY" => "#FFFFFF",
        "PERCENT" => "#FFA22B",
        _ => DEFAULT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_color_prefix_rules() {
        let cases: [(&[&str], &str); 10] = [
            (&["NN", "NNS", "NNP", "NOUN"], "#A4BCED"),
            (&["VB", "VBP", "VERB", "MD"], "#ADF6A2"),
            (&["PRP", "PRP$", "PDT", "PROPN"], "#CCDAF6"),
            (&["IN", "INTJ"], "#FFE8BE"),
            (&["RB", "RBR", "WDT", "WP", "WRB"], "#FFFDA8"),
            (&["DT", "DET", "CD"], "#CCADF6"),
            (&["JJ", "JJS"], "#FFFDA8"),
            (&["TO"], "#FFE8BE"),
            (&["EX", "SYM", "SCONJ"], "#E4CBF6"),
            (&["CC", "CCONJ", "LS", "FW"], "#FFFFFF"),
        ];

        for (tags, color) in cases {
            for tag in tags {
                assert_eq!(pos_color(tag), color, "tag {tag}");
            }
        }
    }

    #[test]
    fn test_pos_color_unmapped() {
        for tag in ["", ".", ",", "ADJ", "ADP", "AUX", "UH", "X", "HYPH", "C"] {
            assert_eq!(pos_color(tag), DEFAULT_COLOR, "tag {tag:?}");
        }
    }

    #[test]
    fn test_pos_color_is_case_sensitive() {
        assert_eq!(pos_color("nn"), DEFAULT_COLOR);
    }

    #[test]
    fn test_ner_color_vocabulary() {
        assert_eq!(ner_color("PERSON"), "#FFCCAA");
        assert_eq!(ner_color("ORGANIZATION"), "#8FB2FF");
        assert_eq!(ner_color("MISC"), "#F1F447");
        for label in ["LOCATION", "COUNTRY", "STATE_OR_PROVINCE", "CITY"] {
            assert_eq!(ner_color(label), "#95DFFF");
        }
        for label in ["DATE", "TIME", "DURATION", "SET"] {
            assert_eq!(ner_color(label), "#9AFFE6");
        }
        assert_eq!(ner_color("MONEY"), "#FFFFFF");
        assert_eq!(ner_color("PERCENT"), "#FFA22B");
    }

    #[test]
    fn test_ner_color_unmapped() {
        for label in ["", "ORG", "GPE", "person", "NORP"] {
            assert_eq!(ner_color(label), DEFAULT_COLOR, "label {label:?}");
        }
    }
}
