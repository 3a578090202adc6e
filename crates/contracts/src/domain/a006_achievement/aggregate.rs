use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Award or distinction earned by the school or its students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: Option<String>,
    pub awarded_to: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
}

impl EntityRecord for Achievement {
    const KIND: EntityKind = EntityKind::Achievements;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        self.title.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Academic,
    Sports,
    Arts,
    Community,
}

impl Vocabulary for AchievementCategory {
    fn all() -> &'static [Self] {
        &[
            AchievementCategory::Academic,
            AchievementCategory::Sports,
            AchievementCategory::Arts,
            AchievementCategory::Community,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            AchievementCategory::Academic => "academic",
            AchievementCategory::Sports => "sports",
            AchievementCategory::Arts => "arts",
            AchievementCategory::Community => "community",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            AchievementCategory::Academic => Bilingual::new("Academic", "Académique"),
            AchievementCategory::Sports => Bilingual::new("Sports", "Sport"),
            AchievementCategory::Arts => Bilingual::new("Arts", "Arts"),
            AchievementCategory::Community => Bilingual::new("Community", "Communauté"),
        }
    }
}
