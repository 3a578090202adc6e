//! Top bar: sidebar toggle, title, interface language and the signed-in
//! account.

use crate::shared::components::ui::Select;
use crate::shared::i18n::{tr, Msg};
use crate::shared::icons::icon;
use crate::system::session::use_app;
use contracts::shared::language::{Bilingual, Language};
use leptos::prelude::*;

const BRAND: Bilingual = Bilingual::new("School administration", "Administration de l'établissement");

#[component]
pub fn TopHeader() -> impl IntoView {
    let app = use_app();
    let toggle_title = move || {
        let label = if app.left_open.get() {
            Bilingual::new("Hide menu", "Masquer le menu")
        } else {
            Bilingual::new("Show menu", "Afficher le menu")
        };
        label.get(app.language.get())
    };

    let language_options = Signal::derive(|| {
        Language::all()
            .into_iter()
            .map(|l| (l.code().to_string(), l.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| app.toggle_left()
                    title=toggle_title
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || BRAND.get(app.language.get())}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__language" title=move || tr(app.language.get(), Msg::Language)>
                    {icon("globe")}
                    <Select
                        id="ui-language"
                        value=Signal::derive(move || app.language.get().code().to_string())
                        options=language_options
                        on_change=Callback::new(move |code: String| {
                            if let Some(language) = Language::from_code(&code) {
                                app.set_language(language);
                            }
                        })
                    />
                </div>

                <Show when=move || app.session.with(|s| s.is_authenticated())>
                    <div class="top-header__user">
                        {icon("students")}
                        <span>{move || app.session.with(|s| s.user_id.clone().unwrap_or_default())}</span>
                    </div>
                </Show>
            </div>
        </header>
    }
}
