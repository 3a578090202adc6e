use super::form::{set_logo_url, settings_errors, toggle_language, SettingsErrors, THEMES};
use crate::layout::section::Section;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::i18n::{tr, Msg};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::query::QueryClient;
use crate::shared::toast::use_toasts;
use crate::system::session::use_app;
use contracts::shared::language::{Bilingual, Language};
use contracts::shared::settings::SiteSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

type Getter = fn(&SiteSettings) -> String;
type Setter = fn(&mut SiteSettings, String);

/// Site-wide settings round-tripped through `/api/settings`.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let app = use_app();
    let toasts = use_toasts();
    let client = StoredValue::new(use_context::<QueryClient>().expect("QueryClient not provided"));

    let settings = RwSignal::new(SiteSettings::default());
    let errors = RwSignal::new(SettingsErrors::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let busy = Signal::derive(move || loading.get() || saving.get());

    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            match client.get_settings().await {
                Ok(loaded) => {
                    let _ = settings.try_set(loaded);
                }
                Err(e) => {
                    log::error!("loading settings failed: {}", e);
                    let lang = app.language.get_untracked();
                    toasts.destructive(
                        tr(lang, Msg::SettingsLoadFailed),
                        e.server_message().map(str::to_string),
                    );
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = settings.get_untracked();
        let problems = settings_errors(&draft);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(SettingsErrors::new());
        saving.set(true);

        let client = client.get_value();
        spawn_local(async move {
            let lang = app.language.get_untracked();
            match client.put_settings(&draft).await {
                Ok(stored) => {
                    let _ = settings.try_set(stored);
                    toasts.success(tr(lang, Msg::SettingsSaved));
                }
                Err(e) => {
                    toasts.destructive(
                        tr(lang, Msg::SettingsSaveFailed),
                        e.server_message().map(str::to_string),
                    );
                }
            }
            let _ = saving.try_set(false);
        });
    };

    let text_input = move |key: &'static str, label: Bilingual, input_type: &'static str, get: Getter, set: Setter| {
        view! {
            <Input
                id=format!("settings-{}", key)
                label=Signal::derive(move || label.get(app.language.get()).to_string())
                input_type=input_type
                value=Signal::derive(move || settings.with(get))
                on_input=Callback::new(move |text: String| {
                    settings.update(|s| set(s, text));
                    errors.update(|e| {
                        e.remove(key);
                    });
                })
                disabled=busy
                error=Signal::derive(move || errors.with(|e| e.get(key).cloned()))
            />
        }
    };

    let theme_options = Signal::derive(move || {
        let lang = app.language.get();
        THEMES
            .iter()
            .map(|t| {
                let label = match *t {
                    "dark" => Bilingual::new("Dark", "Sombre"),
                    _ => Bilingual::new("Light", "Clair"),
                };
                (t.to_string(), label.get(lang).to_string())
            })
            .collect::<Vec<_>>()
    });
    let language_options = Signal::derive(move || {
        settings.with(|s| {
            Language::all()
                .into_iter()
                .filter(|l| s.languages_available.iter().any(|a| a == l.code()))
                .map(|l| (l.code().to_string(), l.display_name().to_string()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            section_key=Section::Settings.key()
            category=PageCategory::System
            title=Signal::derive(move || tr(app.language.get(), Msg::Settings).to_string())
            actions=ToChildren::to_children(move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| save()
                >
                    {move || {
                        let lang = app.language.get();
                        if saving.get() { tr(lang, Msg::Saving) } else { tr(lang, Msg::Save) }
                    }}
                </Button>
            })
        >
            <div class="settings form">
                <section class="settings__section">
                    {text_input("siteName", Bilingual::new("Site name", "Nom du site"), "text",
                        |s| s.site_name.clone(), |s, v| s.site_name = v)}
                    {text_input("contactEmail", Bilingual::new("Contact email", "E-mail de contact"), "email",
                        |s| s.contact_email.clone(), |s, v| s.contact_email = v)}
                    {text_input("logoUrl", Bilingual::new("Logo URL", "URL du logo"), "text",
                        |s| s.logo_url.clone().unwrap_or_default(), |s, v| set_logo_url(s, &v))}
                    <Select
                        id="settings-theme"
                        label=Signal::derive(move || Bilingual::new("Theme", "Thème").get(app.language.get()).to_string())
                        value=Signal::derive(move || settings.with(|s| s.theme.clone()))
                        options=theme_options
                        on_change=Callback::new(move |v: String| settings.update(|s| s.theme = v))
                        disabled=busy
                    />
                </section>

                <section class="settings__section">
                    <h2 class="settings__heading">{move || tr(app.language.get(), Msg::Language)}</h2>
                    <Select
                        id="settings-language-default"
                        label=Signal::derive(move || {
                            Bilingual::new("Default language", "Langue par défaut").get(app.language.get()).to_string()
                        })
                        value=Signal::derive(move || settings.with(|s| s.language_default.clone()))
                        options=language_options
                        on_change=Callback::new(move |v: String| {
                            settings.update(|s| s.language_default = v);
                            errors.update(|e| {
                                e.remove("languageDefault");
                            });
                        })
                        disabled=busy
                        error=Signal::derive(move || errors.with(|e| e.get("languageDefault").cloned()))
                    />
                    {Language::all().into_iter().map(|lang_option| {
                        let code = lang_option.code();
                        view! {
                            <Checkbox
                                id=format!("settings-lang-{}", code)
                                label=lang_option.display_name().to_string()
                                checked=Signal::derive(move || {
                                    settings.with(|s| s.languages_available.iter().any(|l| l == code))
                                })
                                on_change=Callback::new(move |on: bool| {
                                    let mut changed = false;
                                    settings.update(|s| changed = toggle_language(s, code, on));
                                    if !changed {
                                        log::debug!("language toggle for {} refused", code);
                                    }
                                })
                                disabled=busy
                            />
                        }
                    }).collect_view()}
                </section>

                <section class="settings__section">
                    <Checkbox
                        id="settings-announcement-enabled"
                        label=Signal::derive(move || {
                            Bilingual::new("Show announcement banner", "Afficher le bandeau d'annonce")
                                .get(app.language.get())
                                .to_string()
                        })
                        checked=Signal::derive(move || settings.with(|s| s.announcement.enabled))
                        on_change=Callback::new(move |on: bool| settings.update(|s| s.announcement.enabled = on))
                        disabled=busy
                    />
                    <Textarea
                        id="settings-announcement-text"
                        label=Signal::derive(move || {
                            Bilingual::new("Announcement", "Annonce").get(app.language.get()).to_string()
                        })
                        value=Signal::derive(move || settings.with(|s| s.announcement.text.clone()))
                        on_input=Callback::new(move |text: String| {
                            settings.update(|s| s.announcement.text = text);
                            errors.update(|e| {
                                e.remove("announcement");
                            });
                        })
                        disabled=busy
                        error=Signal::derive(move || errors.with(|e| e.get("announcement").cloned()))
                    />
                </section>

                <section class="settings__section">
                    {text_input("facebook", Bilingual::new("Facebook", "Facebook"), "text",
                        |s| s.social_links.facebook.clone(), |s, v| s.social_links.facebook = v)}
                    {text_input("twitter", Bilingual::new("Twitter", "Twitter"), "text",
                        |s| s.social_links.twitter.clone(), |s, v| s.social_links.twitter = v)}
                    {text_input("instagram", Bilingual::new("Instagram", "Instagram"), "text",
                        |s| s.social_links.instagram.clone(), |s, v| s.social_links.instagram = v)}
                    {text_input("youtube", Bilingual::new("YouTube", "YouTube"), "text",
                        |s| s.social_links.youtube.clone(), |s, v| s.social_links.youtube = v)}
                </section>
            </div>
        </PageFrame>
    }
}
