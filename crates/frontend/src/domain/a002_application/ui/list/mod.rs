use crate::shared::entity_screen::cells::{date_cell, status_cell, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use contracts::domain::a002_application::aggregate::{Application, ApplicationStatus};
use contracts::domain::a007_student::aggregate::SchoolClass;
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;

/// Admission applications arrive from the public site; the office only
/// reviews them.
pub fn screen_config() -> EntityScreenConfig<Application> {
    EntityScreenConfig::new(Bilingual::new("Application", "Candidature"))
        .column_with("lastName", Bilingual::new("Applicant", "Candidat"), |_: &Value, a: &Application| {
            a.full_name().into_any()
        })
        .column("email", Bilingual::new("Email", "E-mail"))
        .column("phone", Bilingual::new("Phone", "Téléphone"))
        .column_with(
            "classApplying",
            Bilingual::new("Class", "Classe"),
            vocab_cell::<SchoolClass, Application>(),
        )
        .column_with(
            "status",
            Bilingual::new("Status", "Statut"),
            status_cell::<ApplicationStatus, Application>(),
        )
        .column_with("createdAt", Bilingual::new("Received", "Reçue le"), date_cell::<Application>())
        .filter(FilterSpec::of::<ApplicationStatus>("status", Bilingual::new("Status", "Statut")))
        .filter(FilterSpec::of::<SchoolClass>("classApplying", Bilingual::new("Class", "Classe")))
        .status_workflow::<ApplicationStatus>()
}

#[component]
pub fn ApplicationList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_only_screen() {
        let config = screen_config();
        assert!(!config.can_create());
        assert!(!config.can_edit());
        assert!(config.allow_delete);
        assert_eq!(config.status_options[1].value, "under_review");
    }
}
