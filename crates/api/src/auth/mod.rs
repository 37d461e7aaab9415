//! Authentication primitives for the admin dashboard.
//!
//! - [`bootstrap`] -- first-start admin creation from `ADMIN_PASSWORD`.
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod bootstrap;
pub mod jwt;
pub mod password;

/// Role embedded in tokens issued by the admin login.
pub const ROLE_ADMIN: &str = "admin";
