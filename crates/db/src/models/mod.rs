//! Entity models and DTOs.
//!
//! One typed row struct per query shape: joined queries get their own
//! struct (e.g. `CommentWithAuthor`) instead of optional fields on the
//! base model.

pub mod category;
pub mod comment;
pub mod post;
pub mod profile;
pub mod session;
pub mod token;
