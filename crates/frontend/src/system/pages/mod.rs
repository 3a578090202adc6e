pub mod error_page;

pub use error_page::ErrorPage;
