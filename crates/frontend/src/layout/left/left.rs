use crate::system::session::use_app;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let app = use_app();
    let is_open = move || app.left_open.get();

    view! {
        <aside data-zone="left" class="left app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
