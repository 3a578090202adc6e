use contracts::shared::language::Language;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_ID_KEY: &str = "auth_user_id";
const LANGUAGE_KEY: &str = "ui_language";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Id of the signed-in admin, sent as reviewer/responder on status changes
pub fn get_user_id() -> Option<String> {
    get_local_storage()?
        .get_item(USER_ID_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn load_language() -> Option<Language> {
    let code = get_local_storage()?.get_item(LANGUAGE_KEY).ok()??;
    Language::from_code(&code)
}

pub fn save_language(language: Language) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, language.code());
    }
}
