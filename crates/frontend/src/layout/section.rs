use crate::shared::i18n::{entity_name, Msg};
use contracts::domain::common::EntityKind;
use contracts::shared::language::{Bilingual, Language};

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Entity(EntityKind),
    Settings,
}

impl Section {
    pub fn all() -> Vec<Section> {
        std::iter::once(Section::Dashboard)
            .chain(EntityKind::ALL.into_iter().map(Section::Entity))
            .chain(std::iter::once(Section::Settings))
            .collect()
    }

    /// Value of the `?active=` URL parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Entity(kind) => kind.cache_name(),
            Section::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.key() == key)
    }

    pub fn title(&self) -> Bilingual {
        match self {
            Section::Dashboard => Msg::Dashboard.text(),
            Section::Entity(kind) => entity_name(*kind),
            Section::Settings => Msg::Settings.text(),
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        self.title().get(lang)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Entity(kind) => kind.cache_name(),
            Section::Settings => "settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("students"), Some(Section::Entity(EntityKind::Students)));
        assert_eq!(Section::from_key("a020_wb_promotion"), None);
    }
}
