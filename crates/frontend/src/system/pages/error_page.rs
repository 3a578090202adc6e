use crate::layout::section::Section;
use crate::shared::i18n::{tr, Msg};
use crate::shared::icons::icon;
use crate::system::session::use_app;
use leptos::prelude::*;

/// One line per caught error, sorted so the list does not reshuffle.
pub fn error_details(errors: &Errors) -> Vec<String> {
    let mut details: Vec<String> = errors.iter().map(|(_, e)| e.to_string()).collect();
    details.sort();
    details.dedup();
    details
}

/// Fallback of the content `ErrorBoundary`: what failed, plus a retry and a
/// way back to the dashboard.
#[component]
pub fn ErrorPage(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let app = use_app();
    let details = {
        let errors = errors.clone();
        move || {
            errors
                .with(error_details)
                .into_iter()
                .map(|detail| view! { <li class="error-page__detail">{detail}</li> })
                .collect_view()
        }
    };
    let retry = {
        let errors = errors.clone();
        move |_| {
            errors.set(Errors::default());
            app.remount();
        }
    };
    let go_home = move |_| {
        errors.set(Errors::default());
        app.navigate(Section::Dashboard);
    };

    view! {
        <div class="error-page" role="alert">
            <div class="error-page__icon">{icon("alert")}</div>
            <h1 class="error-page__title">{move || tr(app.language.get(), Msg::ErrorTitle)}</h1>
            <p class="error-page__body">{move || tr(app.language.get(), Msg::ErrorBody)}</p>
            <ul class="error-page__details">{details}</ul>
            <div class="error-page__actions">
                <button class="button button--primary" on:click=retry>
                    {move || tr(app.language.get(), Msg::TryAgain)}
                </button>
                <button class="button button--secondary" on:click=go_home>
                    {icon("home")}
                    {move || tr(app.language.get(), Msg::GoHome)}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use leptos::error::ErrorId;

    #[test]
    fn test_details_list_each_caught_error_once() {
        let mut errors = Errors::default();
        assert!(error_details(&errors).is_empty());

        errors.insert_with_default_key(ApiError::Decode("missing field `title`".to_string()));
        errors.insert(ErrorId::from(1), ApiError::Network("offline".to_string()));
        errors.insert(ErrorId::from(2), ApiError::Network("offline".to_string()));

        assert_eq!(
            error_details(&errors),
            vec![
                "network error: offline".to_string(),
                "unexpected response: missing field `title`".to_string(),
            ]
        );
    }
}
