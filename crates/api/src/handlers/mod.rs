//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod blog;
pub mod categories;
pub mod comments;
pub mod dictionary;
pub mod locale;
pub mod media;
pub mod posts;
pub mod users;
pub mod wheel;
