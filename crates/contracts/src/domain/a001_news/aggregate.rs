use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// News article shown on the public site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct News {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub is_published: bool,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
}

impl EntityRecord for News {
    const KIND: EntityKind = EntityKind::News;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        self.title.clone()
    }

    fn status(&self) -> Option<&str> {
        Some(NewsStatus::of(self).code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Academic,
    Sports,
    Events,
    Announcements,
    General,
}

impl Vocabulary for NewsCategory {
    fn all() -> &'static [Self] {
        &[
            NewsCategory::Academic,
            NewsCategory::Sports,
            NewsCategory::Events,
            NewsCategory::Announcements,
            NewsCategory::General,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            NewsCategory::Academic => "academic",
            NewsCategory::Sports => "sports",
            NewsCategory::Events => "events",
            NewsCategory::Announcements => "announcements",
            NewsCategory::General => "general",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            NewsCategory::Academic => Bilingual::new("Academic", "Académique"),
            NewsCategory::Sports => Bilingual::new("Sports", "Sport"),
            NewsCategory::Events => Bilingual::new("Events", "Événements"),
            NewsCategory::Announcements => Bilingual::new("Announcements", "Annonces"),
            NewsCategory::General => Bilingual::new("General", "Général"),
        }
    }
}

/// Publication state, sent as the `status` list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsStatus {
    Published,
    Draft,
}

impl NewsStatus {
    pub fn of(news: &News) -> Self {
        if news.is_published {
            NewsStatus::Published
        } else {
            NewsStatus::Draft
        }
    }
}

impl Vocabulary for NewsStatus {
    fn all() -> &'static [Self] {
        &[NewsStatus::Published, NewsStatus::Draft]
    }

    fn code(&self) -> &'static str {
        match self {
            NewsStatus::Published => "published",
            NewsStatus::Draft => "draft",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            NewsStatus::Published => Bilingual::new("Published", "Publié"),
            NewsStatus::Draft => Bilingual::new("Draft", "Brouillon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_legacy_record() {
        let news: News = serde_json::from_value(json!({
            "_id": "65a1",
            "title": "Exam Results",
            "category": "academic",
            "isPublished": true
        }))
        .unwrap();
        assert_eq!(news.record_id(), Some("65a1"));
        assert!(news.is_published);
        assert_eq!(news.status(), Some("published"));
        assert_eq!(NewsCategory::from_code(&news.category), Some(NewsCategory::Academic));
    }

    #[test]
    fn test_new_record_serializes_without_id() {
        let news = News {
            title: "Sports Day".to_string(),
            ..News::default()
        };
        let value = serde_json::to_value(&news).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["isPublished"], json!(false));
    }
}
