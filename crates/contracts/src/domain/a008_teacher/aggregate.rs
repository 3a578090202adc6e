use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Teaching staff member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub department: String,
    pub qualification: Option<String>,
    pub status: String,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl EntityRecord for Teacher {
    const KIND: EntityKind = EntityKind::Teachers;

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
pub enum Department {
    Sciences,
    Mathematics,
    Languages,
    Humanities,
    Arts,
    PhysicalEducation,
}

impl Vocabulary for Department {
    fn all() -> &'static [Self] {
        &[
            Department::Sciences,
            Department::Mathematics,
            Department::Languages,
            Department::Humanities,
            Department::Arts,
            Department::PhysicalEducation,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Department::Sciences => "sciences",
            Department::Mathematics => "mathematics",
            Department::Languages => "languages",
            Department::Humanities => "humanities",
            Department::Arts => "arts",
            Department::PhysicalEducation => "physical_education",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            Department::Sciences => Bilingual::new("Sciences", "Sciences"),
            Department::Mathematics => Bilingual::new("Mathematics", "Mathématiques"),
            Department::Languages => Bilingual::new("Languages", "Langues"),
            Department::Humanities => Bilingual::new("Humanities", "Sciences humaines"),
            Department::Arts => Bilingual::new("Arts", "Arts"),
            Department::PhysicalEducation => Bilingual::new("Physical education", "EPS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherStatus {
    Active,
    OnLeave,
    Inactive,
}

impl Vocabulary for TeacherStatus {
    fn all() -> &'static [Self] {
        &[TeacherStatus::Active, TeacherStatus::OnLeave, TeacherStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "active",
            TeacherStatus::OnLeave => "on_leave",
            TeacherStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            TeacherStatus::Active => Bilingual::new("Active", "Actif"),
            TeacherStatus::OnLeave => Bilingual::new("On leave", "En congé"),
            TeacherStatus::Inactive => Bilingual::new("Inactive", "Inactif"),
        }
    }
}
