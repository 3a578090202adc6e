//! Common types and traits for all school records

pub mod entity_kind;
pub mod entity_record;
pub mod record_id;
pub mod status_change;
pub mod vocabulary;

// Re-exports
pub use entity_kind::EntityKind;
pub use entity_record::EntityRecord;
pub use status_change::StatusChange;
pub use vocabulary::Vocabulary;
