use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Campus facility (labs, pitches, boarding houses, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facility {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub capacity: Option<u32>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl EntityRecord for Facility {
    const KIND: EntityKind = EntityKind::Facilities;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityCategory {
    Academic,
    Sports,
    Arts,
    Residential,
    Other,
}

impl Vocabulary for FacilityCategory {
    fn all() -> &'static [Self] {
        &[
            FacilityCategory::Academic,
            FacilityCategory::Sports,
            FacilityCategory::Arts,
            FacilityCategory::Residential,
            FacilityCategory::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            FacilityCategory::Academic => "academic",
            FacilityCategory::Sports => "sports",
            FacilityCategory::Arts => "arts",
            FacilityCategory::Residential => "residential",
            FacilityCategory::Other => "other",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            FacilityCategory::Academic => Bilingual::new("Academic", "Académique"),
            FacilityCategory::Sports => Bilingual::new("Sports", "Sport"),
            FacilityCategory::Arts => Bilingual::new("Arts", "Arts"),
            FacilityCategory::Residential => Bilingual::new("Residential", "Internat"),
            FacilityCategory::Other => Bilingual::new("Other", "Autre"),
        }
    }
}
