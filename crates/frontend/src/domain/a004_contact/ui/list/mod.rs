use crate::shared::entity_screen::cells::{date_cell, status_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use contracts::domain::a004_contact::aggregate::{Contact, ContactStatus};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;

/// Messages sent through the public contact form. Answering one records the
/// response text and the responding admin.
pub fn screen_config() -> EntityScreenConfig<Contact> {
    EntityScreenConfig::new(Bilingual::new("Message", "Message"))
        .column("name", Bilingual::new("Name", "Nom"))
        .column("email", Bilingual::new("Email", "E-mail"))
        .column("subject", Bilingual::new("Subject", "Objet"))
        .column_with("status", Bilingual::new("Status", "Statut"), status_cell::<ContactStatus, Contact>())
        .column_with("createdAt", Bilingual::new("Received", "Reçu le"), date_cell::<Contact>())
        .filter(FilterSpec::of::<ContactStatus>("status", Bilingual::new("Status", "Statut")))
        .status_workflow::<ContactStatus>()
}

#[component]
pub fn ContactList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}
