pub mod form;
pub mod ui;

pub use ui::SettingsPage;
