use super::EntityKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `PUT /api/{entity}/{id}/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: String,
    pub note: Option<String>,
    pub actor_id: Option<String>,
}

impl StatusChange {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn with_actor(mut self, actor_id: Option<String>) -> Self {
        self.actor_id = actor_id;
        self
    }

    /// Request body with the entity's own field names
    /// (`notes`/`reviewerId` or `response`/`responderId`).
    pub fn to_body(&self, kind: EntityKind) -> Value {
        let mut body = Map::new();
        body.insert("status".to_string(), Value::String(self.status.clone()));
        if let Some((note_key, actor_key)) = kind.status_fields() {
            if let Some(note) = &self.note {
                body.insert(note_key.to_string(), Value::String(note.clone()));
            }
            if let Some(actor) = &self.actor_id {
                body.insert(actor_key.to_string(), Value::String(actor.clone()));
            }
        }
        Value::Object(body)
    }
}
