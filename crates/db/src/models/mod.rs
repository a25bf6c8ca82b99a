//! Domain model structs and DTOs.
//!
//! Contains the `FromRow` + `Serialize` entity struct matching the database
//! row, a `Deserialize` create DTO for inserts, and an all-`Option`
//! `Deserialize` patch DTO for partial updates.

pub mod asset;
