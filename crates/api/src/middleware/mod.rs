//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated profile from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.

pub mod auth;
pub mod rbac;
