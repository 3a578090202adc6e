use super::storage;
use crate::layout::section::Section;
use crate::shared::config::ClientConfig;
use contracts::shared::language::Language;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Credentials restored from the browser; the sign-in flow itself is
/// handled outside the back-office.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn restore() -> Self {
        Self {
            access_token: storage::get_access_token(),
            user_id: storage::get_user_id(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Everything the screens need from the composition root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub language: RwSignal<Language>,
    pub section: RwSignal<Section>,
    pub session: RwSignal<Session>,
    pub config: StoredValue<ClientConfig>,
    pub left_open: RwSignal<bool>,
    /// Bumped to rebuild the open section from scratch.
    pub remounts: RwSignal<u64>,
}

impl AppContext {
    pub fn new(config: ClientConfig, session: Session, language: Language) -> Self {
        Self {
            language: RwSignal::new(language),
            section: RwSignal::new(Section::Dashboard),
            session: RwSignal::new(session),
            config: StoredValue::new(config),
            left_open: RwSignal::new(true),
            remounts: RwSignal::new(0),
        }
    }

    pub fn lang(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        storage::save_language(language);
        self.language.set(language);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section.key());
        self.section.set(section);
    }

    pub fn remount(&self) {
        self.remounts.update(|n| *n += 1);
    }

    /// Id stamped on status changes as reviewer/responder.
    pub fn actor_id(&self) -> Option<String> {
        self.session.with_untracked(|s| s.user_id.clone())
    }

    /// Keep `?active=<section>` in the address bar in sync with the open
    /// section, so a reload lands on the same screen.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("active").and_then(|key| Section::from_key(key)) {
            self.section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.section.get();
            let mut params = params.clone();
            params.insert("active".to_string(), section.key().to_string());
            let new_url = format!("?{}", serde_qs::to_string(&params).unwrap_or_default());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not provided")
}
