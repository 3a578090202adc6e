use crate::shared::entity_screen::cells::{status_cell, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema};
use contracts::domain::a008_teacher::aggregate::{Department, Teacher, TeacherStatus};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;

pub fn teacher_form() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("firstName", Bilingual::new("First name", "Prénom"), FieldKind::Text).required())
        .field(FieldSpec::new("lastName", Bilingual::new("Last name", "Nom"), FieldKind::Text).required())
        .field(FieldSpec::new("email", Bilingual::new("Email", "E-mail"), FieldKind::Email).required())
        .field(FieldSpec::new("phone", Bilingual::new("Phone", "Téléphone"), FieldKind::Text))
        .field(FieldSpec::new("subject", Bilingual::new("Subject", "Matière"), FieldKind::Text).required())
        .field(
            FieldSpec::new(
                "department",
                Bilingual::new("Department", "Département"),
                FieldKind::select_of::<Department>(),
            )
            .required(),
        )
        .field(FieldSpec::new(
            "qualification",
            Bilingual::new("Qualification", "Diplôme"),
            FieldKind::Text,
        ))
        .field(
            FieldSpec::new("status", Bilingual::new("Status", "Statut"), FieldKind::select_of::<TeacherStatus>())
                .required(),
        )
}

pub fn screen_config() -> EntityScreenConfig<Teacher> {
    EntityScreenConfig::new(Bilingual::new("Teacher", "Enseignant"))
        .column_with("lastName", Bilingual::new("Name", "Nom"), |_: &Value, t: &Teacher| {
            t.full_name().into_any()
        })
        .column("email", Bilingual::new("Email", "E-mail"))
        .column("subject", Bilingual::new("Subject", "Matière"))
        .column_with(
            "department",
            Bilingual::new("Department", "Département"),
            vocab_cell::<Department, Teacher>(),
        )
        .column_with("status", Bilingual::new("Status", "Statut"), status_cell::<TeacherStatus, Teacher>())
        .filter(FilterSpec::of::<Department>("department", Bilingual::new("Department", "Département")))
        .filter(FilterSpec::of::<TeacherStatus>("status", Bilingual::new("Status", "Statut")))
        .form(teacher_form())
}

#[component]
pub fn TeacherList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;
    use serde_json::json;

    #[test]
    fn test_email_is_checked_before_submit() {
        let form = teacher_form();
        let mut values = form.defaults();
        values.insert("firstName".into(), json!("Jean"));
        values.insert("lastName".into(), json!("Ndiaye"));
        values.insert("subject".into(), json!("Physics"));
        values.insert("email".into(), json!("jean.ndiaye"));
        let errors = form.validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));

        values.insert("email".into(), json!("jean.ndiaye@school.sn"));
        let payload = form.validate(&values).unwrap();
        assert_eq!(payload["department"], "sciences");
    }
}
