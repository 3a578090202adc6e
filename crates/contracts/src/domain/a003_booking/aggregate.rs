use crate::domain::common::{record_id, EntityKind, EntityRecord, Vocabulary};
use crate::shared::language::Bilingual;
use serde::{Deserialize, Serialize};

/// Campus visit booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    #[serde(
        alias = "_id",
        deserialize_with = "record_id::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub visit_date: String,
    pub visit_time: Option<String>,
    pub number_of_visitors: u32,
    pub purpose: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

impl EntityRecord for Booking {
    const KIND: EntityKind = EntityKind::Bookings;

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.visit_date)
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Vocabulary for BookingStatus {
    fn all() -> &'static [Self] {
        &[
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    fn label(&self) -> Bilingual {
        match self {
            BookingStatus::Pending => Bilingual::new("Pending", "En attente"),
            BookingStatus::Confirmed => Bilingual::new("Confirmed", "Confirmée"),
            BookingStatus::Cancelled => Bilingual::new("Cancelled", "Annulée"),
            BookingStatus::Completed => Bilingual::new("Completed", "Terminée"),
        }
    }
}
