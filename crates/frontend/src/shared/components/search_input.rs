use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Sequence of keystrokes; only the latest one is allowed to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Search box that reports its text once typing pauses.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] placeholder: Signal<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(value.get_untracked());
    let debounce = StoredValue::new(Debounce::default());

    // Outside resets (e.g. "Reset filters") flow back into the box.
    Effect::new(move |_| {
        let external = value.get();
        if input_value.get_untracked().trim() != external.trim() {
            input_value.set(external);
        }
    });

    let handle_input = move |text: String| {
        input_value.set(text.clone());
        let mut ticket = 0;
        debounce.update_value(|d| ticket = d.next());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce.try_with_value(|d| d.is_latest(ticket)).unwrap_or(false) {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        debounce.update_value(|d| {
            d.next();
        });
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class="form__input search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debounce = Debounce::default();
        let first = debounce.next();
        let second = debounce.next();
        assert!(!debounce.is_latest(first));
        assert!(debounce.is_latest(second));
    }
}
