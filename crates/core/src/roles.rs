//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `profiles.role` in the
//! `create_profiles` migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";
