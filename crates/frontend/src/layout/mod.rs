pub mod left;
pub mod section;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |        Content         |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // visibility follows AppContext::left_open
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main" data-zone="center">
                    {children()}
                </main>
            </div>
        </div>
    }
}
