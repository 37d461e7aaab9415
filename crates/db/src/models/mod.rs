//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase to match the public site's payloads.

pub mod admin;
pub mod contact_info;
pub mod event;
pub mod hero_config;
pub mod menu_item;
pub mod pack;
pub mod reservation;
pub mod serde_helpers;
