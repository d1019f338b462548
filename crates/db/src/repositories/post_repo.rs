//! Repository for the `posts` table.

use sqlx::PgPool;
use taramind_core::types::DbId;

use crate::models::post::{ContentKind, CreatePost, Post, PostSummary, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, kind, post_type, body, category_id, featured_image, \
                       published_at, order_index, created_at, updated_at";

/// Summary columns for listings (no body).
const SUMMARY_COLUMNS: &str =
    "id, title, slug, kind, post_type, featured_image, published_at, order_index";

pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `slug` is passed separately because the handler derives it from
    /// the title when the form leaves it empty.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePost,
        slug: &str,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts
                (title, slug, kind, post_type, body, category_id, featured_image,
                 published_at, order_index)
             VALUES ($1, $2, $3, COALESCE($4, 'post'), $5, $6, $7, $8, COALESCE($9, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(input.kind)
            .bind(&input.post_type)
            .bind(&input.body)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(input.published_at)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post of a given kind by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE kind = $1 AND slug = $2");
        sqlx::query_as::<_, Post>(&query)
            .bind(kind)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Published-first blog listing. Excludes character entries.
    pub async fn list_blog(pool: &PgPool) -> Result<Vec<PostSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM posts
             WHERE kind = 'blog' AND post_type <> $1
             ORDER BY published_at DESC NULLS LAST"
        );
        sqlx::query_as::<_, PostSummary>(&query)
            .bind(crate::models::post::POST_TYPE_CHARACTER)
            .fetch_all(pool)
            .await
    }

    /// Page menu entries, in display order.
    pub async fn list_pages(pool: &PgPool) -> Result<Vec<PostSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM posts
             WHERE kind = 'page'
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, PostSummary>(&query).fetch_all(pool).await
    }

    /// Character entries for the casting-campaign page, in display order.
    pub async fn list_characters(pool: &PgPool) -> Result<Vec<PostSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM posts
             WHERE post_type = $1
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, PostSummary>(&query)
            .bind(crate::models::post::POST_TYPE_CHARACTER)
            .fetch_all(pool)
            .await
    }

    /// Admin listing of all posts of a kind, newest first.
    pub async fn list_by_kind(
        pool: &PgPool,
        kind: ContentKind,
    ) -> Result<Vec<PostSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM posts
             WHERE kind = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PostSummary>(&query)
            .bind(kind)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    /// The kind of a post never changes after creation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                post_type = COALESCE($4, post_type),
                body = COALESCE($5, body),
                category_id = COALESCE($6, category_id),
                featured_image = COALESCE($7, featured_image),
                published_at = COALESCE($8, published_at),
                order_index = COALESCE($9, order_index),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.post_type)
            .bind(&input.body)
            .bind(input.category_id)
            .bind(&input.featured_image)
            .bind(input.published_at)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
