//! Domain logic for the assets service.
//!
//! Pure, I/O-free building blocks: the display-identifier generator, field
//! validation rules, role names, and the shared error taxonomy.

pub mod asset_id;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
