pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialog;
pub mod entity_screen;
pub mod form;
pub mod i18n;
pub mod icons;
pub mod list_state;
pub mod modal;
pub mod page_frame;
pub mod query;
pub mod toast;
