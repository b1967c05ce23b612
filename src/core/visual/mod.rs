//! brat visualization data
//!
//! Turns annotated sentences into the `docData`/`collData` structures the
//! brat client renders.

pub mod builder;
pub mod mode;
pub mod model;

pub use builder::VisualBuilder;
pub use mode::Mode;
pub use model::{CollData, DocData, EntitySpan, EntityType, Relation, RelationArg, RelationType};
