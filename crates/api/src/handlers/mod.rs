//! Request handlers.
//!
//! Each submodule serves one resource and delegates to the matching
//! repository in `venue_db`, mapping errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod contact;
pub mod event;
pub mod hero;
pub mod menu;
pub mod pack;
pub mod reservation;
