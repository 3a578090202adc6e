use serde::{Deserialize, Serialize};

/// Site-wide configuration round-tripped through `GET/PUT /api/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub contact_email: String,
    pub theme: String,
    pub language_default: String,
    pub languages_available: Vec<String>,
    pub logo_url: Option<String>,
    pub announcement: Announcement,
    pub social_links: SocialLinks,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: String::new(),
            contact_email: String::new(),
            theme: "light".to_string(),
            language_default: "en".to_string(),
            languages_available: vec!["en".to_string(), "fr".to_string()],
            logo_url: None,
            announcement: Announcement::default(),
            social_links: SocialLinks::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Announcement {
    pub enabled: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
}

impl SiteSettings {
    /// Problems that block saving, as `(field, message)` pairs.
    pub fn validation_errors(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        if self.site_name.trim().is_empty() {
            errors.push(("siteName", "Site name is required".to_string()));
        }
        if !self.contact_email.trim().is_empty() && !self.contact_email.contains('@') {
            errors.push(("contactEmail", "Contact email is not valid".to_string()));
        }
        if !self.languages_available.contains(&self.language_default) {
            errors.push((
                "languageDefault",
                format!("Default language '{}' is not enabled", self.language_default),
            ));
        }
        if self.announcement.enabled && self.announcement.text.trim().is_empty() {
            errors.push(("announcement", "Announcement text is required when enabled".to_string()));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_body_uses_defaults() {
        let settings: SiteSettings =
            serde_json::from_value(json!({"siteName": "Lycée Saint-Exupéry"})).unwrap();
        assert_eq!(settings.site_name, "Lycée Saint-Exupéry");
        assert_eq!(settings.language_default, "en");
        assert_eq!(settings.languages_available, vec!["en", "fr"]);
        assert!(!settings.announcement.enabled);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(SiteSettings::default()).unwrap();
        assert!(value.get("languageDefault").is_some());
        assert!(value.get("socialLinks").and_then(|s| s.get("youtube")).is_some());
    }

    #[test]
    fn test_validation() {
        let mut settings = SiteSettings::default();
        let fields: Vec<_> = settings.validation_errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["siteName"]);

        settings.site_name = "School".to_string();
        settings.contact_email = "office".to_string();
        settings.language_default = "de".to_string();
        settings.announcement.enabled = true;
        let fields: Vec<_> = settings.validation_errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["contactEmail", "languageDefault", "announcement"]);
    }
}
