//! brat document and collection data
//!
//! Field names and shapes match what brat's `Util.embed` expects: entities
//! and relations serialize as positional arrays, style entries as objects
//! with camelCase keys.

use serde::{Serialize, Serializer};

/// Border style brat derives from the background color
pub const BORDER_DARKEN: &str = "darken";

/// Dash pattern for dependency arcs
pub const DEP_DASH_ARRAY: &str = "3,3";

/// A highlighted text span, serialized as `["T0", "NNS", [[0, 4]]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Span id (`T<n>`)
    pub id: String,
    /// Displayed type
    pub label: String,
    /// Start offset (chars, inclusive)
    pub start: usize,
    /// End offset (chars, exclusive)
    pub end: usize,
}

impl EntitySpan {
    /// Create a span `T<n>` covering `[start, end)`
    #[must_use]
    pub fn new(n: usize, label: &str, start: usize, end: usize) -> Self {
        Self {
            id: entity_id(n),
            label: label.to_string(),
            start,
            end,
        }
    }
}

impl Serialize for EntitySpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.id, &self.label, [[self.start, self.end]]).serialize(serializer)
    }
}

/// A dependency arc, serialized as `["R0", "nsubj", [["head", "T1"], ["child", "T0"]]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Relation id (`R<n>`)
    pub id: String,
    /// Dependency label
    pub label: String,
    /// Entity id of the head
    pub head: String,
    /// Entity id of the dependent
    pub child: String,
}

impl Relation {
    /// Create relation `R<child>` from `T<head>` to `T<child>`
    #[must_use]
    pub fn new(label: &str, head: usize, child: usize) -> Self {
        Self {
            id: format!("R{child}"),
            label: label.to_string(),
            head: entity_id(head),
            child: entity_id(child),
        }
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let args = [("head", &self.head), ("child", &self.child)];
        (&self.id, &self.label, args).serialize(serializer)
    }
}

/// Style for one entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    /// Type name
    #[serde(rename = "type")]
    pub kind: String,
    /// Display labels, longest first
    pub labels: Vec<String>,
    /// Background color
    pub bg_color: String,
    /// Border color or derivation keyword
    pub border_color: String,
}

impl EntityType {
    /// Style labelled with its own type name and a darkened border
    #[must_use]
    pub fn new(kind: &str, bg_color: &str) -> Self {
        Self {
            kind: kind.to_string(),
            labels: vec![kind.to_string()],
            bg_color: bg_color.to_string(),
            border_color: BORDER_DARKEN.to_string(),
        }
    }
}

/// Allowed targets for one relation role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationArg {
    /// Role name (`head` or `child`)
    pub role: String,
    /// Entity types this role may point at
    pub targets: Vec<String>,
}

/// Style for one relation type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationType {
    /// Relation label
    #[serde(rename = "type")]
    pub kind: String,
    /// Display labels
    pub labels: Vec<String>,
    /// Arc dash pattern
    pub dash_array: String,
    /// Arc color
    pub color: String,
    /// Role constraints
    pub args: Vec<RelationArg>,
}

impl RelationType {
    /// Dashed dependency arc whose head and child both target `target`
    #[must_use]
    pub fn dependency(label: &str, color: &str, target: &str) -> Self {
        let arg = |role: &str| RelationArg {
            role: role.to_string(),
            targets: vec![target.to_string()],
        };
        Self {
            kind: label.to_string(),
            labels: vec![label.to_string()],
            dash_array: DEP_DASH_ARRAY.to_string(),
            color: color.to_string(),
            args: vec![arg("head"), arg("child")],
        }
    }
}

/// Per-document payload (`docData`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DocData {
    /// Highlighted spans
    pub entities: Vec<EntitySpan>,
    /// Arcs between spans
    pub relations: Vec<Relation>,
    /// Text the span offsets index into
    pub text: String,
}

impl DocData {
    /// Empty payload over `text`
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self {
            entities: Vec::new(),
            relations: Vec::new(),
            text,
        }
    }
}

/// Style collection (`collData`)
///
/// `relation_types` is `None` outside dependency mode and is then left out
/// of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CollData {
    /// Entity styles, first insertion order
    pub entity_types: Vec<EntityType>,
    /// Relation styles, first insertion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_types: Option<Vec<RelationType>>,
}

impl CollData {
    /// Collection with entity styles only
    #[must_use]
    pub const fn entities_only() -> Self {
        Self {
            entity_types: Vec::new(),
            relation_types: None,
        }
    }

    /// Collection with both entity and relation styles
    #[must_use]
    pub const fn with_relations() -> Self {
        Self {
            entity_types: Vec::new(),
            relation_types: Some(Vec::new()),
        }
    }

    /// Add an entity style unless an identical one is present
    pub fn add_entity_type(&mut self, style: EntityType) {
        if !self.entity_types.contains(&style) {
            self.entity_types.push(style);
        }
    }

    /// Add a relation style unless an identical one is present
    ///
    /// Ignored when the collection carries no relation styles.
    pub fn add_relation_type(&mut self, style: RelationType) {
        if let Some(types) = self.relation_types.as_mut() {
            if !types.contains(&style) {
                types.push(style);
            }
        }
    }
}

fn entity_id(n: usize) -> String {
    format!("T{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_span_json() {
        let span = EntitySpan::new(0, "NNS", 0, 4);
        assert_eq!(serde_json::to_value(&span).unwrap(), json!(["T0", "NNS", [[0, 4]]]));
    }

    #[test]
    fn test_relation_json() {
        let relation = Relation::new("nsubj", 1, 0);
        assert_eq!(
            serde_json::to_value(&relation).unwrap(),
            json!(["R0", "nsubj", [["head", "T1"], ["child", "T0"]]])
        );
    }

    #[test]
    fn test_entity_type_json() {
        let style = EntityType::new("NNS", "#A4BCED");
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({"type": "NNS", "labels": ["NNS"], "bgColor": "#A4BCED", "borderColor": "darken"})
        );
    }

    #[test]
    fn test_relation_type_json() {
        let style = RelationType::dependency("nsubj", "#A4BCED", "NNS");
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            json!({
                "type": "nsubj",
                "labels": ["nsubj"],
                "dashArray": "3,3",
                "color": "#A4BCED",
                "args": [
                    {"role": "head", "targets": ["NNS"]},
                    {"role": "child", "targets": ["NNS"]}
                ]
            })
        );
    }

    #[test]
    fn test_coll_data_omits_missing_relation_types() {
        let coll = CollData::entities_only();
        let value = serde_json::to_value(&coll).unwrap();
        assert!(value.get("relation_types").is_none());
        assert_eq!(value["entity_types"], json!([]));

        let coll = CollData::with_relations();
        let value = serde_json::to_value(&coll).unwrap();
        assert_eq!(value["relation_types"], json!([]));
    }

    #[test]
    fn test_style_dedup() {
        let mut coll = CollData::with_relations();
        coll.add_entity_type(EntityType::new("NN", "#A4BCED"));
        coll.add_entity_type(EntityType::new("NN", "#A4BCED"));
        coll.add_relation_type(RelationType::dependency("det", "#CCADF6", "DT"));
        coll.add_relation_type(RelationType::dependency("det", "#CCADF6", "DT"));
        // Same label, different target: structurally distinct
        coll.add_relation_type(RelationType::dependency("det", "#CCADF6", "PDT"));

        assert_eq!(coll.entity_types.len(), 1);
        assert_eq!(coll.relation_types.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_relation_types_ignored_without_list() {
        let mut coll = CollData::entities_only();
        coll.add_relation_type(RelationType::dependency("det", "#CCADF6", "DT"));
        assert!(coll.relation_types.is_none());
    }
}
