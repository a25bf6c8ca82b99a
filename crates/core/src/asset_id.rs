//! Display-identifier generation for asset records.
//!
//! Asset codes are human-facing strings of the form `AST0001`, `AST0002`, ...
//! derived from the identifier of the most recently inserted row (highest
//! internal sequence number, which is not necessarily the lexicographically
//! highest code).

/// Prefix carried by every generated asset code.
pub const ASSET_ID_PREFIX: &str = "AST";

// The numeric part is zero-padded to 4 digits; values past 9999 simply
// widen the code (AST10000) instead of being rejected.

/// Derive the next asset code from the most recently inserted asset's code.
///
/// - No prior asset → `AST0001`.
/// - Prior code `AST<n>` with numeric `<n>` → `AST` + `n + 1`, zero-padded
///   to 4 digits.
/// - Prefix mismatch or non-numeric suffix → reset to `AST0001`. This
///   fallback does not guarantee global uniqueness; the unique constraint
///   on the column catches a collision at insert time.
///
/// # Examples
///
/// ```
/// use assets_core::asset_id::next_asset_id;
///
/// assert_eq!(next_asset_id(None), "AST0001");
/// assert_eq!(next_asset_id(Some("AST0041")), "AST0042");
/// assert_eq!(next_asset_id(Some("EQUIP-7")), "AST0001");
/// ```
pub fn next_asset_id(last_asset_id: Option<&str>) -> String {
    let next = match last_asset_id {
        Some(last) => match last.strip_prefix(ASSET_ID_PREFIX) {
            Some(suffix) => match suffix.parse::<u64>() {
                Ok(n) => n + 1,
                Err(_) => 1,
            },
            None => 1,
        },
        None => 1,
    };

    format!("{ASSET_ID_PREFIX}{next:04}")
}
