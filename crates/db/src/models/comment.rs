//! Comment entity model and query-shaped rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taramind_core::types::{DbId, Timestamp};

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Comment joined with its author's display name (blog comment list).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub author_name: String,
}

/// Comment joined with post title and author name (admin moderation list).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithContext {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub post_title: String,
    pub post_slug: String,
    pub user_id: DbId,
    pub author_name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub comment_text: String,
}
