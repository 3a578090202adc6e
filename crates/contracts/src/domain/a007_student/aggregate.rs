use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Enrolled student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub admission_number: String,
    /// Wire name is `class`, which is also the list filter key.
    #[serde(rename = "class")]
    pub class_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl EntityRecord for Student {
    const KIND: EntityKind = EntityKind::Students;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        format!("{} ({})", self.full_name(), self.admission_number)
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolClass {
    Form1,
    Form2,
    Form3,
    Form4,
    Form5,
    Form6,
}

impl Vocabulary for SchoolClass {
    fn all() -> &'static [Self] {
        &[
            SchoolClass::Form1,
            SchoolClass::Form2,
            SchoolClass::Form3,
            SchoolClass::Form4,
            SchoolClass::Form5,
            SchoolClass::Form6,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            SchoolClass::Form1 => "form1",
            SchoolClass::Form2 => "form2",
            SchoolClass::Form3 => "form3",
            SchoolClass::Form4 => "form4",
            SchoolClass::Form5 => "form5",
            SchoolClass::Form6 => "form6",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            SchoolClass::Form1 => Bilingual::new("Form 1", "Sixième"),
            SchoolClass::Form2 => Bilingual::new("Form 2", "Cinquième"),
            SchoolClass::Form3 => Bilingual::new("Form 3", "Quatrième"),
            SchoolClass::Form4 => Bilingual::new("Form 4", "Troisième"),
            SchoolClass::Form5 => Bilingual::new("Form 5", "Seconde"),
            SchoolClass::Form6 => Bilingual::new("Form 6", "Première"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    Active,
    Graduated,
    Transferred,
    Suspended,
}

impl Vocabulary for StudentStatus {
    fn all() -> &'static [Self] {
        &[
            StudentStatus::Active,
            StudentStatus::Graduated,
            StudentStatus::Transferred,
            StudentStatus::Suspended,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Graduated => "graduated",
            StudentStatus::Transferred => "transferred",
            StudentStatus::Suspended => "suspended",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            StudentStatus::Active => Bilingual::new("Active", "Actif"),
            StudentStatus::Graduated => Bilingual::new("Graduated", "Diplômé"),
            StudentStatus::Transferred => Bilingual::new("Transferred", "Transféré"),
            StudentStatus::Suspended => Bilingual::new("Suspended", "Suspendu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_wire_name() {
        let student: Student = serde_json::from_value(json!({
            "id": "s1",
            "firstName": "Jean",
            "lastName": "Mbarga",
            "admissionNumber": "ADM-2024-017",
            "class": "form2",
            "status": "active"
        }))
        .unwrap();
        assert_eq!(student.class_name, "form2");
        assert_eq!(SchoolClass::from_code(&student.class_name), Some(SchoolClass::Form2));

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["class"], json!("form2"));
        assert!(value.get("className").is_none());
    }
}
