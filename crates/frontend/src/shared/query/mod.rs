//! In-memory list cache and the client every screen reads and writes through.

pub mod cache;
pub mod client;

pub use cache::{QueryCache, QueryKey};
pub use client::QueryClient;
