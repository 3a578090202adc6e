//! Cell renderers reused by the per-entity column lists.

use crate::shared::components::data_table::cell_text;
use crate::shared::components::ui::{Badge, BadgeTone, StatusBadge};
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::i18n::vocab_label;
use crate::system::session::use_app;
use contracts::domain::common::Vocabulary;
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;

/// Status code as a coloured badge with its localized label.
pub fn status_badge<V: Vocabulary>(code: &str) -> AnyView {
    let app = use_app();
    let label_code = code.to_string();
    let label = Signal::derive(move || vocab_label::<V>(&label_code, app.language.get()));
    view! { <StatusBadge code=code.to_string() label=label /> }.into_any()
}

pub fn status_cell<V: Vocabulary, T: 'static>() -> impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static {
    |value, _| status_badge::<V>(value.as_str().unwrap_or_default())
}

/// Localized label of a vocabulary code; unknown codes are shown as-is.
pub fn vocab_cell<V: Vocabulary, T: 'static>() -> impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static {
    |value, _| {
        let app = use_app();
        match value.as_str().filter(|s| !s.is_empty()) {
            Some(code) => {
                let code = code.to_string();
                (move || vocab_label::<V>(&code, app.language.get())).into_any()
            }
            None => cell_text(value).into_any(),
        }
    }
}

pub fn date_cell<T: 'static>() -> impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static {
    |value, _| {
        let app = use_app();
        match value.as_str().filter(|s| !s.trim().is_empty()) {
            Some(raw) => {
                let raw = raw.to_string();
                (move || format_date(&raw, app.language.get())).into_any()
            }
            None => cell_text(value).into_any(),
        }
    }
}

pub fn time_cell<T: 'static>() -> impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static {
    |value, _| {
        value
            .as_str()
            .and_then(format_time)
            .unwrap_or_else(|| cell_text(value))
            .into_any()
    }
}

pub fn flag_cell<T: 'static>(yes: Bilingual, no: Bilingual) -> impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static {
    move |value, _| {
        let app = use_app();
        let on = value.as_bool().unwrap_or(false);
        let (tone, text) = if on {
            (BadgeTone::Success, yes)
        } else {
            (BadgeTone::Neutral, no)
        };
        view! { <Badge tone=tone>{move || text.get(app.language.get())}</Badge> }.into_any()
    }
}
