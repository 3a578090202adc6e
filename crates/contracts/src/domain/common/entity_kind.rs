use serde::{Deserialize, Serialize};

/// Record types managed from the admin back-office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    News,
    Applications,
    Bookings,
    Contacts,
    Facilities,
    Achievements,
    Students,
    Teachers,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::News,
        EntityKind::Applications,
        EntityKind::Bookings,
        EntityKind::Contacts,
        EntityKind::Facilities,
        EntityKind::Achievements,
        EntityKind::Students,
        EntityKind::Teachers,
    ];

    /// Collection endpoint, e.g. `/api/news`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            EntityKind::News => "/api/news",
            EntityKind::Applications => "/api/applications",
            EntityKind::Bookings => "/api/bookings",
            EntityKind::Contacts => "/api/contacts",
            EntityKind::Facilities => "/api/facilities",
            EntityKind::Achievements => "/api/achievements",
            EntityKind::Students => "/api/students",
            EntityKind::Teachers => "/api/teachers",
        }
    }

    /// Item endpoint, e.g. `/api/news/42`.
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint(), urlencoding::encode(id))
    }

    /// Status sub-resource, e.g. `/api/applications/42/status`.
    pub fn status_path(&self, id: &str) -> String {
        format!("{}/status", self.item_path(id))
    }

    /// Top-level list key of the legacy flat response shape.
    pub fn list_field(&self) -> &'static str {
        self.cache_name()
    }

    /// Stable name used for cache keys and log lines.
    pub fn cache_name(&self) -> &'static str {
        match self {
            EntityKind::News => "news",
            EntityKind::Applications => "applications",
            EntityKind::Bookings => "bookings",
            EntityKind::Contacts => "contacts",
            EntityKind::Facilities => "facilities",
            EntityKind::Achievements => "achievements",
            EntityKind::Students => "students",
            EntityKind::Teachers => "teachers",
        }
    }

    /// Body keys of the status-change request: `(note_key, actor_key)`.
    ///
    /// `None` for record types without a status workflow.
    pub fn status_fields(&self) -> Option<(&'static str, &'static str)> {
        match self {
            EntityKind::Applications | EntityKind::Bookings => Some(("notes", "reviewerId")),
            EntityKind::Contacts => Some(("response", "responderId")),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cache_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(EntityKind::News.endpoint(), "/api/news");
        assert_eq!(EntityKind::Students.item_path("s-1"), "/api/students/s-1");
        assert_eq!(
            EntityKind::Applications.status_path("a 1"),
            "/api/applications/a%201/status"
        );
    }

    #[test]
    fn test_status_fields() {
        assert_eq!(EntityKind::Bookings.status_fields(), Some(("notes", "reviewerId")));
        assert_eq!(EntityKind::Contacts.status_fields(), Some(("response", "responderId")));
        assert_eq!(EntityKind::Facilities.status_fields(), None);
    }

    #[test]
    fn test_endpoints_are_unique() {
        let mut endpoints: Vec<_> = EntityKind::ALL.iter().map(|k| k.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), EntityKind::ALL.len());
    }
}
