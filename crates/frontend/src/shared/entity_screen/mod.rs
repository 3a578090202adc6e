//! Generic list/create/edit/delete/status screen shared by every record type.

pub mod cells;
pub mod config;
pub mod mutation;
pub mod view;

pub use config::{EntityScreenConfig, FilterSpec, ScreenPhase};
pub use mutation::WriteOp;
pub use view::EntityScreen;
