use crate::dashboards::OverviewDashboard;
use crate::domain::a001_news::ui::list::NewsList;
use crate::domain::a002_application::ui::list::ApplicationList;
use crate::domain::a003_booking::ui::list::BookingList;
use crate::domain::a004_contact::ui::list::ContactList;
use crate::domain::a005_facility::ui::list::FacilityList;
use crate::domain::a006_achievement::ui::list::AchievementList;
use crate::domain::a007_student::ui::list::StudentList;
use crate::domain::a008_teacher::ui::list::TeacherList;
use crate::layout::section::Section;
use crate::layout::Shell;
use crate::shared::api::HttpTransport;
use crate::shared::config::ClientConfig;
use crate::shared::query::QueryClient;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::pages::ErrorPage;
use crate::system::session::{storage, AppContext, Session};
use crate::system::settings::SettingsPage;
use chrono::Duration;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use std::sync::Arc;

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Section::Settings => view! { <SettingsPage /> }.into_any(),
        Section::Entity(kind) => match kind {
            EntityKind::News => view! { <NewsList /> }.into_any(),
            EntityKind::Applications => view! { <ApplicationList /> }.into_any(),
            EntityKind::Bookings => view! { <BookingList /> }.into_any(),
            EntityKind::Contacts => view! { <ContactList /> }.into_any(),
            EntityKind::Facilities => view! { <FacilityList /> }.into_any(),
            EntityKind::Achievements => view! { <AchievementList /> }.into_any(),
            EntityKind::Students => view! { <StudentList /> }.into_any(),
            EntityKind::Teachers => view! { <TeacherList /> }.into_any(),
        },
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_window();
    let language = storage::load_language().unwrap_or_default();
    log::debug!("api base {}, language {}", config.resolved_api_base(), language.code());

    let transport = Arc::new(HttpTransport::new(config.resolved_api_base()));
    let client = QueryClient::new(transport).with_stale_after(Duration::minutes(config.stale_minutes));
    let toasts = ToastService::new(config.toast_millis);

    let app = AppContext::new(config, Session::restore(), language);
    provide_context(app);
    provide_context(client);
    provide_context(toasts);
    app.init_url_sync();

    view! {
        <Shell>
            <ErrorBoundary fallback=|errors| view! { <ErrorPage errors=errors /> }>
                {move || {
                    app.remounts.track();
                    section_view(app.section.get())
                }}
            </ErrorBoundary>
        </Shell>
        <ToastHost />
    }
}
