use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Message sent through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub response: Option<String>,
    pub created_at: Option<String>,
}

impl EntityRecord for Contact {
    const KIND: EntityKind = EntityKind::Contacts;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        format!("{}: {}", self.name, self.subject)
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Read,
    Responded,
    Archived,
}

impl Vocabulary for ContactStatus {
    fn all() -> &'static [Self] {
        &[
            ContactStatus::New,
            ContactStatus::Read,
            ContactStatus::Responded,
            ContactStatus::Archived,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Responded => "responded",
            ContactStatus::Archived => "archived",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            ContactStatus::New => Bilingual::new("New", "Nouveau"),
            ContactStatus::Read => Bilingual::new("Read", "Lu"),
            ContactStatus::Responded => Bilingual::new("Responded", "Répondu"),
            ContactStatus::Archived => Bilingual::new("Archived", "Archivé"),
        }
    }
}
