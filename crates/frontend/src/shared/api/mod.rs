//! Transport layer between the back-office and the school REST API.

pub mod error;
#[cfg(test)]
pub mod fake;
pub mod http;
pub mod transport;

pub use error::ApiError;
pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
