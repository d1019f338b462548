//! Repository for the `auth_tokens` table.

use sqlx::PgPool;
use taramind_core::types::{DbId, Timestamp};

use crate::models::token::{AuthToken, TokenPurpose};

const COLUMNS: &str = "id, user_id, purpose, token_hash, expires_at, used_at, created_at";

pub struct TokenRepo;

impl TokenRepo {
    /// Persist a new token. Only the hash is stored.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        purpose: TokenPurpose,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_tokens (user_id, purpose, token_hash, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(user_id)
            .bind(purpose.as_str())
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a valid (unused, unexpired) token of the given purpose.
    pub async fn find_valid(
        pool: &PgPool,
        purpose: TokenPurpose,
        token_hash: &str,
    ) -> Result<Option<AuthToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM auth_tokens
             WHERE token_hash = $1
               AND purpose = $2
               AND used_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(token_hash)
            .bind(purpose.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Consume a token so it cannot be replayed.
    pub async fn mark_used(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE auth_tokens SET used_at = NOW() WHERE id = $1 AND used_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
