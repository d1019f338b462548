//! Post entity model and DTOs.
//!
//! A "post" is any content entry: a site page, a blog post, or a
//! character entry for the casting campaign. The logical kind is the
//! explicit [`ContentKind`] column; `post_type` is a free-form label
//! within the blog kind (`"post"`, `"review"`, `"character"`, ...).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taramind_core::types::{DbId, Timestamp};

/// Logical content kind. Stored as the `content_kind` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Page,
    Blog,
}

/// The `post_type` label marking character entries.
pub const POST_TYPE_CHARACTER: &str = "character";

/// A post row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub kind: ContentKind,
    pub post_type: String,
    /// Raw HTML or a serialized block document; see `taramind_core::content`.
    pub body: String,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary row for listings (no body).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub kind: ContentKind,
    pub post_type: String,
    pub featured_image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub order_index: i32,
}

/// DTO for creating a new post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    /// Derived from `title` via the Vietnamese slug helper when omitted.
    pub slug: Option<String>,
    pub kind: ContentKind,
    /// Defaults to `"post"`.
    pub post_type: Option<String>,
    pub body: String,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub published_at: Option<Timestamp>,
    /// Defaults to 0.
    pub order_index: Option<i32>,
}

/// DTO for updating an existing post. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub post_type: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<DbId>,
    pub featured_image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub order_index: Option<i32>,
}
