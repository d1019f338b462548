//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and strength checks.
//! - [`jwt`] -- access-token issuance plus the opaque token helpers used for
//!   refresh tokens, password-reset links, and email-verification links.

pub mod jwt;
pub mod password;
