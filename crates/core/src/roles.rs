//! Well-known role names issued by the external auth service.
//!
//! The auth service also issues `DOCTOR` and `PATIENT` roles; those carry no
//! asset-service privileges beyond authenticated read access.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_STAFF: &str = "STAFF";

/// Check whether `role` matches any of the `required` roles.
///
/// Comparison is case-insensitive: tokens in the wild carry `"staff"`,
/// `"Staff"`, and `"STAFF"` interchangeably.
pub fn role_matches(role: &str, required: &[&str]) -> bool {
    required.iter().any(|r| r.eq_ignore_ascii_case(role))
}
