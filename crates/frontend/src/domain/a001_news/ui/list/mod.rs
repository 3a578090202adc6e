use crate::shared::entity_screen::cells::{date_cell, status_badge, vocab_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema};
use contracts::domain::a001_news::aggregate::{News, NewsCategory, NewsStatus};
use contracts::domain::common::EntityRecord;
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;

pub fn news_form() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("title", Bilingual::new("Title", "Titre"), FieldKind::Text).required())
        .field(
            FieldSpec::new("category", Bilingual::new("Category", "Catégorie"), FieldKind::select_of::<NewsCategory>())
                .required(),
        )
        .field(FieldSpec::new("excerpt", Bilingual::new("Excerpt", "Résumé"), FieldKind::TextArea))
        .field(FieldSpec::new("content", Bilingual::new("Content", "Contenu"), FieldKind::TextArea).required())
        .field(FieldSpec::new("author", Bilingual::new("Author", "Auteur"), FieldKind::Text))
        .field(FieldSpec::new("imageUrl", Bilingual::new("Image URL", "URL de l'image"), FieldKind::Text))
        .field(FieldSpec::new(
            "isPublished",
            Bilingual::new("Published", "Publié"),
            FieldKind::Checkbox,
        ))
}

pub fn screen_config() -> EntityScreenConfig<News> {
    EntityScreenConfig::new(Bilingual::new("News article", "Article"))
        .column("title", Bilingual::new("Title", "Titre"))
        .column_with("category", Bilingual::new("Category", "Catégorie"), vocab_cell::<NewsCategory, News>())
        .column_with("isPublished", Bilingual::new("Status", "Statut"), |_: &Value, news: &News| {
            status_badge::<NewsStatus>(news.status().unwrap_or_default())
        })
        .column("author", Bilingual::new("Author", "Auteur"))
        .column_with("createdAt", Bilingual::new("Created", "Créé le"), date_cell::<News>())
        .filter(FilterSpec::of::<NewsCategory>("category", Bilingual::new("Category", "Catégorie")))
        .filter(FilterSpec::of::<NewsStatus>("status", Bilingual::new("Status", "Statut")))
        .form(news_form())
}

#[component]
pub fn NewsList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldError;
    use serde_json::json;

    #[test]
    fn test_new_article_payload() {
        let form = news_form();
        let mut values = form.defaults();
        assert_eq!(values["category"], json!("academic"));
        assert_eq!(values["isPublished"], json!(false));

        values.insert("title".into(), json!("Exam Results"));
        values.insert("content".into(), json!("Results are out."));
        values.insert("isPublished".into(), json!(true));
        let payload = form.validate(&values).unwrap();
        assert_eq!(payload["title"], "Exam Results");
        assert_eq!(payload["isPublished"], true);
        assert!(!payload.contains_key("author"));
    }

    #[test]
    fn test_missing_title_blocks_submit() {
        let form = news_form();
        let errors = form.validate(&form.defaults()).unwrap_err();
        assert_eq!(errors.get("title"), Some(&FieldError::Required));
        assert_eq!(errors.get("content"), Some(&FieldError::Required));
    }

    #[test]
    fn test_screen_offers_status_filter() {
        let config = screen_config();
        assert!(config.can_create());
        assert!(!config.has_status_workflow());
        let keys: Vec<_> = config.filters.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["category", "status"]);
    }
}
