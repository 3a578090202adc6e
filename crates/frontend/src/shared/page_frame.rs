//! Standard root wrapper of every screen.
//!
//! The root element carries `id="{section}--{category}"` and
//! `data-page-category`, so a screen found in the DOM inspector can be
//! traced back to its module.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination.
    List,
    Dashboard,
    /// Settings and other administration forms.
    System,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::System => "system",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::System => "page page--system",
        }
    }
}

pub fn page_id(section_key: &str, category: PageCategory) -> String {
    format!("{}--{}", section_key, category.as_str())
}

#[component]
pub fn PageFrame(
    #[prop(into)] section_key: String,
    category: PageCategory,
    /// Page title shown in the header.
    #[prop(into)]
    title: Signal<String>,
    /// Controls on the right of the header.
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id(&section_key, category)
            class=category.class()
            data-page-category=category.as_str()
        >
            <div class="page__header">
                <h1 class="page__title">{move || title.get()}</h1>
                <div class="page__actions">
                    {actions.map(|actions| actions())}
                </div>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("news", PageCategory::List), "news--list");
        assert_eq!(page_id("settings", PageCategory::System), "settings--system");
    }
}
