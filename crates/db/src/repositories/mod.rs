//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod contact_info_repo;
pub mod event_repo;
pub mod hero_config_repo;
pub mod menu_item_repo;
pub mod pack_repo;
pub mod reservation_repo;

pub use admin_repo::AdminRepo;
pub use contact_info_repo::ContactInfoRepo;
pub use event_repo::EventRepo;
pub use hero_config_repo::HeroConfigRepo;
pub use menu_item_repo::MenuItemRepo;
pub use pack_repo::PackRepo;
pub use reservation_repo::{Admission, ReservationRepo};
