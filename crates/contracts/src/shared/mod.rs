pub mod api;
pub mod dashboard;
pub mod language;
pub mod list_query;
pub mod pagination;
pub mod settings;
