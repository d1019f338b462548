//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taramind_core::taxonomy::TreeItem;
use taramind_core::types::{DbId, Timestamp};

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// `None` marks a root. May dangle after a parent is deleted.
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TreeItem for Category {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
    pub parent_id: Option<DbId>,
}

/// DTO for updating an existing category. This is a full replacement --
/// the admin edit form posts every field, and `parent_id: None` clears
/// the parent (re-roots the category).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
    pub parent_id: Option<DbId>,
}
