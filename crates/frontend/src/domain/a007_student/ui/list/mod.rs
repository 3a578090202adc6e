use crate::shared::entity_screen::cells::{status_cell, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, SelectOption};
use contracts::domain::a007_student::aggregate::{SchoolClass, Student, StudentStatus};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;

fn gender_options() -> Vec<SelectOption> {
    vec![
        SelectOption {
            value: "male",
            label: Bilingual::new("Male", "Masculin"),
        },
        SelectOption {
            value: "female",
            label: Bilingual::new("Female", "Féminin"),
        },
    ]
}

pub fn student_form() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("firstName", Bilingual::new("First name", "Prénom"), FieldKind::Text).required())
        .field(FieldSpec::new("lastName", Bilingual::new("Last name", "Nom"), FieldKind::Text).required())
        .field(
            FieldSpec::new(
                "admissionNumber",
                Bilingual::new("Admission number", "N° d'inscription"),
                FieldKind::Text,
            )
            .required(),
        )
        .field(
            FieldSpec::new("class", Bilingual::new("Class", "Classe"), FieldKind::select_of::<SchoolClass>())
                .required(),
        )
        .field(FieldSpec::new(
            "gender",
            Bilingual::new("Gender", "Sexe"),
            FieldKind::Select(gender_options()),
        ))
        .field(FieldSpec::new(
            "dateOfBirth",
            Bilingual::new("Date of birth", "Date de naissance"),
            FieldKind::Date,
        ))
        .field(FieldSpec::new(
            "guardianName",
            Bilingual::new("Guardian", "Responsable légal"),
            FieldKind::Text,
        ))
        .field(FieldSpec::new(
            "guardianPhone",
            Bilingual::new("Guardian phone", "Téléphone du responsable"),
            FieldKind::Text,
        ))
        .field(
            FieldSpec::new("status", Bilingual::new("Status", "Statut"), FieldKind::select_of::<StudentStatus>())
                .required(),
        )
}

pub fn screen_config() -> EntityScreenConfig<Student> {
    EntityScreenConfig::new(Bilingual::new("Student", "Élève"))
        .column("admissionNumber", Bilingual::new("Admission no.", "N° d'inscription"))
        .column_with("lastName", Bilingual::new("Name", "Nom"), |_: &Value, s: &Student| {
            s.full_name().into_any()
        })
        .column_with("class", Bilingual::new("Class", "Classe"), vocab_cell::<SchoolClass, Student>())
        .column("guardianPhone", Bilingual::new("Guardian phone", "Tél. responsable"))
        .column_with("status", Bilingual::new("Status", "Statut"), status_cell::<StudentStatus, Student>())
        .filter(FilterSpec::of::<SchoolClass>("class", Bilingual::new("Class", "Classe")))
        .filter(FilterSpec::of::<StudentStatus>("status", Bilingual::new("Status", "Statut")))
        .form(student_form())
}

#[component]
pub fn StudentList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}
