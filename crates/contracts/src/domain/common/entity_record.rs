use super::EntityKind;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type listed and edited through the generic management screen.
pub trait EntityRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Which collection the record belongs to.
    const KIND: EntityKind;

    /// Server id, when the record has one.
    fn record_id(&self) -> Option<&str>;

    /// Short human label, used in confirmation dialogs.
    fn display_label(&self) -> String;

    /// Current workflow status, for record types that have one.
    fn status(&self) -> Option<&str> {
        None
    }
}
