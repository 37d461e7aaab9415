//! Request extractors that gate the admin dashboard endpoints.

pub mod auth;
