use crate::dashboards::d400_overview::api;
use crate::layout::section::Section;
use crate::shared::components::stat_card::StatCard;
use crate::shared::i18n::{entity_name, tr, Msg};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::query::QueryClient;
use crate::system::session::use_app;
use contracts::domain::common::EntityKind;
use contracts::shared::dashboard::OverviewStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Landing screen: one counter card per collection. A card opens its list.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let app = use_app();
    let client = StoredValue::new(use_context::<QueryClient>().expect("QueryClient not provided"));
    let stats = RwSignal::new(None::<OverviewStats>);
    let reload = RwSignal::new(0u64);

    Effect::new(move |_| {
        reload.track();
        stats.set(None);
        let client = client.get_value();
        spawn_local(async move {
            let loaded = api::load_overview(&client).await;
            let _ = stats.try_set(Some(loaded));
        });
    });

    let title = Signal::derive(move || tr(app.language.get(), Msg::Overview).to_string());
    let language = Signal::derive(move || app.language.get());

    view! {
        <PageFrame
            section_key=Section::Dashboard.key()
            category=PageCategory::Dashboard
            title=title
            actions=ToChildren::to_children(move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || stats.with(Option::is_none))
                    on_click=move |_| {
                        client.with_value(|c| EntityKind::ALL.into_iter().for_each(|k| c.invalidate(k)));
                        reload.update(|n| *n += 1);
                    }
                >
                    {icon("refresh")}
                    {move || tr(app.language.get(), Msg::Refresh)}
                </Button>
            })
        >
            <div class="dashboard__grid">
                {EntityKind::ALL.into_iter().map(|kind| {
                    let label = Signal::derive(move || entity_name(kind).get(app.language.get()).to_string());
                    let value = Signal::derive(move || stats.with(|s| s.map(|s| s.get(kind))));
                    view! {
                        <StatCard
                            label=label
                            icon_name=kind.cache_name()
                            value=value
                            language=language
                            on_click=Callback::new(move |_| app.navigate(Section::Entity(kind)))
                        />
                    }
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
