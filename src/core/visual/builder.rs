//! Builds brat document/collection data from an annotated sentence

use super::model::{CollData, DocData, EntitySpan, EntityType, Relation, RelationType};
use super::Mode;
use crate::core::colors::{ner_color, pos_color};
use crate::core::models::Sentence;

/// Generator for brat visualization data
pub struct VisualBuilder;

impl VisualBuilder {
    /// Build the `(docData, collData)` pair for one sentence
    ///
    /// In dependency and part-of-speech modes every token becomes a span
    /// labelled with its fine-grained tag. Dependency mode adds an arc from
    /// each non-root token's head. Named-entity mode spans the pipeline's
    /// entities instead of tokens.
    ///
    /// Offsets advance by `len + 1` characters per span, so they line up
    /// with the space-joined token text. For named entities that is an
    /// approximation: entities are assumed to tile the text.
    #[must_use]
    pub fn build(sentence: &Sentence, mode: Mode) -> (DocData, CollData) {
        let mut doc = DocData::new(sentence.joined_text());
        let mut coll = if mode.has_relations() {
            CollData::with_relations()
        } else {
            CollData::entities_only()
        };

        match mode {
            Mode::Dependency | Mode::PartOfSpeech => {
                Self::add_tokens(sentence, mode, &mut doc, &mut coll);
            }
            Mode::NamedEntity => Self::add_named_entities(sentence, &mut doc, &mut coll),
        }

        crate::debug!(
            "Built {mode} data: {} entities, {} relations, {} entity types",
            doc.entities.len(),
            doc.relations.len(),
            coll.entity_types.len()
        );

        (doc, coll)
    }

    fn add_tokens(sentence: &Sentence, mode: Mode, doc: &mut DocData, coll: &mut CollData) {
        let mut cursor = 0;
        for token in &sentence.tokens {
            let color = pos_color(&token.tag);
            let end = cursor + token.char_len();

            doc.entities
                .push(EntitySpan::new(token.index, &token.tag, cursor, end));
            coll.add_entity_type(EntityType::new(&token.tag, color));

            if mode.has_relations() && !token.is_root() {
                doc.relations
                    .push(Relation::new(&token.dep, token.head, token.index));
                coll.add_relation_type(RelationType::dependency(&token.dep, color, &token.tag));
            }

            cursor = end + 1;
        }
    }

    fn add_named_entities(sentence: &Sentence, doc: &mut DocData, coll: &mut CollData) {
        let mut cursor = 0;
        for (n, entity) in sentence.entities.iter().enumerate() {
            let end = cursor + entity.text.chars().count();

            doc.entities
                .push(EntitySpan::new(n, &entity.label, cursor, end));
            coll.add_entity_type(EntityType::new(&entity.label, ner_color(&entity.label)));

            cursor = end + 1;
        }
    }
}
