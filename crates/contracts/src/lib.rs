//! Wire types shared by the school admin client.
//!
//! Everything here is target-independent: it compiles for the browser
//! bundle and for native test runs alike.

pub mod domain;
pub mod shared;
