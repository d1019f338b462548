//! Domain logic for the Taramind CMS backend.
//!
//! Everything in this crate is pure: no database handles, no HTTP types,
//! no I/O. The api and db crates depend on it, never the other way around.

pub mod content;
pub mod error;
pub mod locale;
pub mod rate_limit;
pub mod roles;
pub mod slug;
pub mod taxonomy;
pub mod types;
