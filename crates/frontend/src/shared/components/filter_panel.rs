use crate::shared::i18n::{tr, Msg};
use crate::shared::icons::icon;
use crate::system::session::use_app;
use leptos::prelude::*;

/// Collapsible filter bar with an active-filter badge and a reset button.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    on_reset: Callback<()>,
    /// Always-visible controls next to the title (search box)
    #[prop(optional)]
    header_content: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{move || tr(app.language.get(), Msg::Filters)}</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {header_content.as_ref().map(|content| content())}
                </div>
                <button
                    class="button button--ghost filter-panel__reset"
                    disabled=move || active_filters_count.get() == 0
                    on:click=move |_| on_reset.run(())
                >
                    {move || tr(app.language.get(), Msg::ResetFilters)}
                </button>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}
