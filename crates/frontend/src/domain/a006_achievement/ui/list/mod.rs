use crate::shared::entity_screen::cells::{date_cell, flag_cell, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema};
use contracts::domain::a006_achievement::aggregate::{Achievement, AchievementCategory};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;

const FEATURED: Bilingual = Bilingual::new("Featured", "À la une");
const REGULAR: Bilingual = Bilingual::new("Regular", "Standard");

pub fn achievement_form() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("title", Bilingual::new("Title", "Titre"), FieldKind::Text).required())
        .field(
            FieldSpec::new(
                "category",
                Bilingual::new("Category", "Catégorie"),
                FieldKind::select_of::<AchievementCategory>(),
            )
            .required(),
        )
        .field(
            FieldSpec::new("description", Bilingual::new("Description", "Description"), FieldKind::TextArea)
                .required(),
        )
        .field(FieldSpec::new("date", Bilingual::new("Date", "Date"), FieldKind::Date))
        .field(FieldSpec::new("awardedTo", Bilingual::new("Awarded to", "Décerné à"), FieldKind::Text))
        .field(FieldSpec::new("imageUrl", Bilingual::new("Image URL", "URL de l'image"), FieldKind::Text))
        .field(FieldSpec::new("isFeatured", FEATURED, FieldKind::Checkbox))
}

pub fn screen_config() -> EntityScreenConfig<Achievement> {
    EntityScreenConfig::new(Bilingual::new("Achievement", "Réussite"))
        .column("title", Bilingual::new("Title", "Titre"))
        .column_with(
            "category",
            Bilingual::new("Category", "Catégorie"),
            vocab_cell::<AchievementCategory, Achievement>(),
        )
        .column_with("date", Bilingual::new("Date", "Date"), date_cell::<Achievement>())
        .column("awardedTo", Bilingual::new("Awarded to", "Décerné à"))
        .column_with("isFeatured", FEATURED, flag_cell::<Achievement>(FEATURED, REGULAR))
        .filter(FilterSpec::of::<AchievementCategory>("category", Bilingual::new("Category", "Catégorie")))
        .form(achievement_form())
}

#[component]
pub fn AchievementList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;
    use serde_json::json;

    #[test]
    fn test_date_must_be_iso() {
        let form = achievement_form();
        let mut values = form.defaults();
        values.insert("title".into(), json!("Regional maths olympiad"));
        values.insert("description".into(), json!("First place"));
        values.insert("date".into(), json!("04/05/2026"));
        assert_eq!(
            form.validate(&values).unwrap_err().get("date"),
            Some(&FieldError::InvalidDate)
        );

        values.insert("date".into(), json!("2026-05-04"));
        let payload = form.validate(&values).unwrap();
        assert_eq!(payload["date"], json!("2026-05-04"));
        assert_eq!(payload["isFeatured"], json!(false));
    }
}
