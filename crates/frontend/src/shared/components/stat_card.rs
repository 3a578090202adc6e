use crate::shared::icons::icon;
use contracts::shared::language::Language;
use leptos::prelude::*;

/// Group digits by thousands: `1,250` in English, `1 250` in French.
pub fn format_count(n: u64, lang: Language) -> String {
    let sep = match lang {
        Language::En => ',',
        Language::Fr => '\u{202f}',
    };
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// One counter tile. `value = None` renders a placeholder while loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: Signal<String>,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<u64>>,
    #[prop(into)] language: Signal<Language>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v, language.get()),
        None => "—".to_string(),
    };

    view! {
        <div
            class="stat-card"
            class:stat-card--clickable=on_click.is_some()
            class:stat-card--loading=move || value.get().is_none()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
