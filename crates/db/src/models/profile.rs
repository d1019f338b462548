//! Profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taramind_core::types::{DbId, Timestamp};

/// A profile row from the `profiles` table. Holds both the public
/// profile fields and the credential hash (identity is self-managed).
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub phone: Option<String>,
    pub signature: Option<String>,
    pub password_hash: String,
    pub email_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a profile. Never carries the credential hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub phone: Option<String>,
    pub signature: Option<String>,
    pub email_verified: bool,
    pub created_at: Timestamp,
}

impl From<Profile> for PublicProfile {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            name: p.name,
            role: p.role,
            phone: p.phone,
            signature: p.signature,
            email_verified: p.email_verified,
            created_at: p.created_at,
        }
    }
}

/// DTO for creating a profile at registration.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub email: String,
    pub name: String,
    /// Defaults to `customer` when `None`.
    pub role: Option<String>,
    pub password_hash: String,
}

/// DTO for the admin profile editor. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub signature: Option<String>,
}
