//! Repository for the `comments` table.
//!
//! Comment creation enforces the one-per-user-per-window throttle with
//! a single conditional INSERT, so two concurrent submissions from the
//! same user cannot both slip past the check.

use sqlx::PgPool;
use taramind_core::rate_limit::COMMENT_WINDOW_SECS;
use taramind_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CommentWithAuthor, CommentWithContext};

const COLUMNS: &str = "id, comment_text, post_id, user_id, created_at";

pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment unless the user already commented within the
    /// throttle window. Atomic: the window check and the insert are one
    /// statement. Returns `None` when throttled.
    pub async fn create_rate_limited(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
        comment_text: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (comment_text, post_id, user_id)
             SELECT $1, $2, $3
             WHERE NOT EXISTS (
                 SELECT 1 FROM comments
                 WHERE user_id = $3
                   AND created_at > NOW() - make_interval(secs => $4)
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(comment_text)
            .bind(post_id)
            .bind(user_id)
            .bind(COMMENT_WINDOW_SECS as f64)
            .fetch_optional(pool)
            .await
    }

    /// Timestamp of the user's most recent comment, if any. Used to
    /// compute the "wait N more seconds" message after a throttled insert.
    pub async fn latest_created_at_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar::<_, Timestamp>(
            "SELECT created_at FROM comments
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Comments on a post with author names, newest first.
    pub async fn list_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at,
                    p.name AS author_name
             FROM comments c
             JOIN profiles p ON p.id = c.user_id
             WHERE c.post_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }

    /// All comments with post and author context, newest first (moderation).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CommentWithContext>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithContext>(
            "SELECT c.id, c.comment_text, c.post_id, po.title AS post_title,
                    po.slug AS post_slug, c.user_id, pr.name AS author_name,
                    c.created_at
             FROM comments c
             JOIN posts po ON po.id = c.post_id
             JOIN profiles pr ON pr.id = c.user_id
             ORDER BY c.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
