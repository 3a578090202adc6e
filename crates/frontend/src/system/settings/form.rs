use contracts::shared::language::Language;
use contracts::shared::settings::SiteSettings;
use std::collections::BTreeMap;

pub type SettingsErrors = BTreeMap<&'static str, String>;

pub const THEMES: [&str; 2] = ["light", "dark"];

/// Field errors keyed by the camelCase field name.
pub fn settings_errors(settings: &SiteSettings) -> SettingsErrors {
    settings.validation_errors().into_iter().collect()
}

/// Enable or disable an interface language. The default language cannot be
/// disabled and at least one language stays enabled.
pub fn toggle_language(settings: &mut SiteSettings, code: &str, enabled: bool) -> bool {
    let present = settings.languages_available.iter().any(|l| l == code);
    match (enabled, present) {
        (true, false) => {
            settings.languages_available.push(code.to_string());
            // Keep the stored order stable whatever the click order was.
            settings.languages_available.sort_by_key(|l| {
                Language::all()
                    .iter()
                    .position(|known| known.code() == l.as_str())
                    .unwrap_or(usize::MAX)
            });
            true
        }
        (false, true) => {
            if settings.language_default == code || settings.languages_available.len() == 1 {
                return false;
            }
            settings.languages_available.retain(|l| l != code);
            true
        }
        _ => false,
    }
}

/// Logo URL as stored: blank means no logo.
pub fn set_logo_url(settings: &mut SiteSettings, raw: &str) {
    let trimmed = raw.trim();
    settings.logo_url = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_cannot_be_disabled() {
        let mut settings = SiteSettings::default();
        assert!(!toggle_language(&mut settings, "en", false));
        assert_eq!(settings.languages_available, vec!["en", "fr"]);

        assert!(toggle_language(&mut settings, "fr", false));
        assert_eq!(settings.languages_available, vec!["en"]);
        assert!(!toggle_language(&mut settings, "fr", false));
    }

    #[test]
    fn test_enable_keeps_known_order() {
        let mut settings = SiteSettings {
            language_default: "fr".to_string(),
            languages_available: vec!["fr".to_string()],
            ..SiteSettings::default()
        };
        assert!(toggle_language(&mut settings, "en", true));
        assert_eq!(settings.languages_available, vec!["en", "fr"]);
        assert!(!toggle_language(&mut settings, "en", true));
    }

    #[test]
    fn test_errors_by_field() {
        let mut settings = SiteSettings::default();
        settings.contact_email = "office".to_string();
        let errors = settings_errors(&settings);
        assert!(errors.contains_key("siteName"));
        assert!(errors.contains_key("contactEmail"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_blank_logo_is_none() {
        let mut settings = SiteSettings::default();
        set_logo_url(&mut settings, "  ");
        assert_eq!(settings.logo_url, None);
        set_logo_url(&mut settings, " https://cdn.example.org/logo.png ");
        assert_eq!(settings.logo_url.as_deref(), Some("https://cdn.example.org/logo.png"));
    }
}
