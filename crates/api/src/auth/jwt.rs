//! Access-token issuance and opaque token helpers.
//!
//! Access tokens are HS256-signed JWTs carrying an [`AccessClaims`] payload.
//! Refresh tokens, password-reset tokens, and email-verification tokens are
//! all opaque random strings; only their SHA-256 hex digest is persisted so a
//! database leak does not expose live credentials.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use taramind_core::types::DbId;
use uuid::Uuid;

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Subject -- the profile's database id.
    pub sub: DbId,
    /// Role name (`"admin"` or `"customer"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token id (UUID v4).
    pub jti: String,
}

/// Token lifetimes and the signing secret.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 30).
    pub refresh_expiry_days: i64,
    /// Password-reset / email-verification token lifetime in hours (default: 24).
    pub one_time_token_expiry_hours: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 30;
const DEFAULT_ONE_TIME_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                        | Required | Default |
    /// |--------------------------------|----------|---------|
    /// | `JWT_SECRET`                   | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`       | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`      | no       | `30`    |
    /// | `AUTH_TOKEN_EXPIRY_HOURS`      | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset or empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        let one_time_token_expiry_hours: i64 = std::env::var("AUTH_TOKEN_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_ONE_TIME_EXPIRY_HOURS.to_string())
            .parse()
            .expect("AUTH_TOKEN_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            access_expiry_mins,
            refresh_expiry_days,
            one_time_token_expiry_hours,
        }
    }
}

/// Issue an HS256 access token for a profile.
pub fn issue_access_token(
    profile_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: profile_id,
        role: role.to_string(),
        exp: now + config.access_expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate an access token and return its claims.
///
/// Checks the signature and expiration.
pub fn decode_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    let data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Generate an opaque random token.
///
/// Returns `(plaintext, sha256_hex_digest)`. The plaintext goes to the client
/// (refresh token body, or reset/verification link); only the digest is stored.
pub fn mint_opaque_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = digest_token(&plaintext);
    (plaintext, digest)
}

/// SHA-256 hex digest of an opaque token, for lookup against stored hashes.
pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_expiry_mins: 15,
            refresh_expiry_days: 30,
            one_time_token_expiry_hours: 24,
        }
    }

    #[test]
    fn test_issue_and_decode_round_trip() {
        let config = config_with("a-sufficiently-long-signing-secret");
        let token = issue_access_token(7, "customer", &config).expect("issue should succeed");

        let claims = decode_access_token(&token, &config).expect("decode should succeed");
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.role, "customer");
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_access_token_rejected() {
        let config = config_with("a-sufficiently-long-signing-secret");

        // Build a token expired well past jsonwebtoken's 60s default leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            sub: 1,
            role: "customer".to_string(),
            exp: now - 600,
            iat: now - 1200,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encode should succeed");

        assert!(decode_access_token(&token, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_access_token(1, "admin", &config_with("secret-one"))
            .expect("issue should succeed");
        assert!(decode_access_token(&token, &config_with("secret-two")).is_err());
    }

    #[test]
    fn test_opaque_token_digest_is_stable() {
        let (plaintext, digest) = mint_opaque_token();
        assert_eq!(digest, digest_token(&plaintext));
        assert_eq!(digest.len(), 64, "SHA-256 hex digest is 64 chars");
    }

    #[test]
    fn test_opaque_tokens_are_unique() {
        let (a, _) = mint_opaque_token();
        let (b, _) = mint_opaque_token();
        assert_ne!(a, b);
    }
}
