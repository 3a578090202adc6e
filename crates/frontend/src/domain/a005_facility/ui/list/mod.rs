use crate::shared::entity_screen::cells::{flag_cell, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema};
use contracts::domain::a005_facility::aggregate::{Facility, FacilityCategory};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::json;

const ACTIVE: Bilingual = Bilingual::new("Active", "Active");
const INACTIVE: Bilingual = Bilingual::new("Inactive", "Inactive");

pub fn facility_form() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("name", Bilingual::new("Name", "Nom"), FieldKind::Text).required())
        .field(
            FieldSpec::new(
                "category",
                Bilingual::new("Category", "Catégorie"),
                FieldKind::select_of::<FacilityCategory>(),
            )
            .required(),
        )
        .field(
            FieldSpec::new("description", Bilingual::new("Description", "Description"), FieldKind::TextArea)
                .required(),
        )
        .field(FieldSpec::new("capacity", Bilingual::new("Capacity", "Capacité"), FieldKind::Number))
        .field(FieldSpec::new("imageUrl", Bilingual::new("Image URL", "URL de l'image"), FieldKind::Text))
        .field(FieldSpec::new("isActive", ACTIVE, FieldKind::Checkbox).default_value(json!(true)))
}

pub fn screen_config() -> EntityScreenConfig<Facility> {
    EntityScreenConfig::new(Bilingual::new("Facility", "Installation"))
        .column("name", Bilingual::new("Name", "Nom"))
        .column_with(
            "category",
            Bilingual::new("Category", "Catégorie"),
            vocab_cell::<FacilityCategory, Facility>(),
        )
        .column("capacity", Bilingual::new("Capacity", "Capacité"))
        .column_with("isActive", Bilingual::new("Status", "Statut"), flag_cell::<Facility>(ACTIVE, INACTIVE))
        .filter(FilterSpec::of::<FacilityCategory>("category", Bilingual::new("Category", "Catégorie")))
        .filter(FilterSpec::boolean("isActive", Bilingual::new("Status", "Statut"), ACTIVE, INACTIVE))
        .form(facility_form())
}

#[component]
pub fn FacilityList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}
