use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Admission application submitted from the public admissions page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub class_applying: String,
    pub previous_school: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

impl Application {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl EntityRecord for Application {
    const KIND: EntityKind = EntityKind::Applications;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        self.full_name()
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Accepted,
    Rejected,
    Waitlisted,
}

impl Vocabulary for ApplicationStatus {
    fn all() -> &'static [Self] {
        &[
            ApplicationStatus::Pending,
            ApplicationStatus::UnderReview,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Waitlisted,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Waitlisted => "waitlisted",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            ApplicationStatus::Pending => Bilingual::new("Pending", "En attente"),
            ApplicationStatus::UnderReview => Bilingual::new("Under review", "En cours d'examen"),
            ApplicationStatus::Accepted => Bilingual::new("Accepted", "Acceptée"),
            ApplicationStatus::Rejected => Bilingual::new("Rejected", "Refusée"),
            ApplicationStatus::Waitlisted => Bilingual::new("Waitlisted", "Liste d'attente"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_and_label() {
        let app: Application = serde_json::from_value(json!({
            "id": 12,
            "firstName": "Awa",
            "lastName": "Diallo",
            "classApplying": "form1",
            "status": "under_review"
        }))
        .unwrap();
        assert_eq!(app.record_id(), Some("12"));
        assert_eq!(app.display_label(), "Awa Diallo");
        assert_eq!(
            ApplicationStatus::from_code(&app.status),
            Some(ApplicationStatus::UnderReview)
        );
    }
}
