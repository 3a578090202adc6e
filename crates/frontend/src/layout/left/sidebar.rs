//! Sidebar with collapsible menu groups.

use crate::layout::section::Section;
use crate::shared::icons::icon;
use crate::system::session::use_app;
use contracts::domain::common::EntityKind;
use contracts::shared::language::Bilingual;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: Bilingual,
    icon: &'static str,
    items: Vec<Section>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: Bilingual::new("Overview", "Vue d'ensemble"),
            icon: "dashboard",
            items: vec![Section::Dashboard],
        },
        MenuGroup {
            id: "inbox",
            label: Bilingual::new("Requests", "Demandes"),
            icon: "applications",
            items: vec![
                Section::Entity(EntityKind::Applications),
                Section::Entity(EntityKind::Bookings),
                Section::Entity(EntityKind::Contacts),
            ],
        },
        MenuGroup {
            id: "content",
            label: Bilingual::new("Website content", "Contenu du site"),
            icon: "news",
            items: vec![
                Section::Entity(EntityKind::News),
                Section::Entity(EntityKind::Facilities),
                Section::Entity(EntityKind::Achievements),
            ],
        },
        MenuGroup {
            id: "school",
            label: Bilingual::new("School", "Établissement"),
            icon: "students",
            items: vec![
                Section::Entity(EntityKind::Students),
                Section::Entity(EntityKind::Teachers),
            ],
        },
        MenuGroup {
            id: "system",
            label: Bilingual::new("System", "Système"),
            icon: "settings",
            items: vec![Section::Settings],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = use_app();
    let expanded_groups = RwSignal::new(menu_groups().iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let label = group.label;
                let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));
                let items = StoredValue::new(group.items);

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|groups| {
                                    if let Some(pos) = groups.iter().position(|g| *g == group_id) {
                                        groups.remove(pos);
                                    } else {
                                        groups.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{move || label.get(app.language.get())}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|section| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || app.section.get() == section
                                            style:padding-left="10px"
                                            on:click=move |_| app.navigate(section)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(section.icon())}
                                                <span>{move || section.label(app.language.get())}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_is_reachable_once() {
        let mut listed: Vec<&str> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .map(|s| s.key())
            .collect();
        listed.sort();
        let mut all: Vec<&str> = Section::all().iter().map(|s| s.key()).collect();
        all.sort();
        assert_eq!(listed, all);
    }
}
