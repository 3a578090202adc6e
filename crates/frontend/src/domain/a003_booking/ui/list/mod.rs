use crate::shared::entity_screen::cells::{date_cell, status_cell, time_cell};
use crate::shared::entity_screen::{EntityScreen, EntityScreenConfig, FilterSpec};
use contracts::domain::a003_booking::aggregate::{Booking, BookingStatus};
use contracts::shared::language::Bilingual;
use leptos::prelude::*;

pub fn screen_config() -> EntityScreenConfig<Booking> {
    EntityScreenConfig::new(Bilingual::new("Booking", "Réservation"))
        .column("name", Bilingual::new("Name", "Nom"))
        .column("email", Bilingual::new("Email", "E-mail"))
        .column_with("visitDate", Bilingual::new("Visit date", "Date de visite"), date_cell::<Booking>())
        .column_with("visitTime", Bilingual::new("Time", "Heure"), time_cell::<Booking>())
        .column("numberOfVisitors", Bilingual::new("Visitors", "Visiteurs"))
        .column_with("status", Bilingual::new("Status", "Statut"), status_cell::<BookingStatus, Booking>())
        .filter(FilterSpec::of::<BookingStatus>("status", Bilingual::new("Status", "Statut")))
        .status_workflow::<BookingStatus>()
}

#[component]
pub fn BookingList() -> impl IntoView {
    view! { <EntityScreen config=screen_config() /> }
}
