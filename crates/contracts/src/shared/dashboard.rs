use crate::domain::common::EntityKind;
use serde::{Deserialize, Serialize};

/// Record counts shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub news: u64,
    pub applications: u64,
    pub bookings: u64,
    pub contacts: u64,
    pub facilities: u64,
    pub achievements: u64,
    pub students: u64,
    pub teachers: u64,
}

impl OverviewStats {
    /// Build from settled per-entity results. A failed counter reads as 0.
    pub fn from_settled<E>(results: impl IntoIterator<Item = (EntityKind, Result<u64, E>)>) -> Self {
        let mut stats = Self::default();
        for (kind, result) in results {
            *stats.slot(kind) = result.unwrap_or(0);
        }
        stats
    }

    pub fn get(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::News => self.news,
            EntityKind::Applications => self.applications,
            EntityKind::Bookings => self.bookings,
            EntityKind::Contacts => self.contacts,
            EntityKind::Facilities => self.facilities,
            EntityKind::Achievements => self.achievements,
            EntityKind::Students => self.students,
            EntityKind::Teachers => self.teachers,
        }
    }

    fn slot(&mut self, kind: EntityKind) -> &mut u64 {
        match kind {
            EntityKind::News => &mut self.news,
            EntityKind::Applications => &mut self.applications,
            EntityKind::Bookings => &mut self.bookings,
            EntityKind::Contacts => &mut self.contacts,
            EntityKind::Facilities => &mut self.facilities,
            EntityKind::Achievements => &mut self.achievements,
            EntityKind::Students => &mut self.students,
            EntityKind::Teachers => &mut self.teachers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_counters_default_to_zero() {
        let results: Vec<(EntityKind, Result<u64, String>)> = vec![
            (EntityKind::News, Ok(14)),
            (EntityKind::Applications, Err("HTTP 500".to_string())),
            (EntityKind::Students, Ok(820)),
            (EntityKind::Teachers, Err("offline".to_string())),
        ];
        let stats = OverviewStats::from_settled(results);
        assert_eq!(stats.news, 14);
        assert_eq!(stats.applications, 0);
        assert_eq!(stats.students, 820);
        assert_eq!(stats.teachers, 0);
        assert_eq!(stats.get(EntityKind::Bookings), 0);
    }
}
