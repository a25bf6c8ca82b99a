//! Field validation rules for asset records.
//!
//! The warranty range check applies on create and update alike; the expiry
//! check runs only on create, since an existing record may legally carry a
//! warranty expiry that has since passed.

use crate::error::CoreError;
use crate::types::Date;

/// Inclusive warranty range in months.
pub const WARRANTY_MIN_MONTHS: i32 = 0;
pub const WARRANTY_MAX_MONTHS: i32 = 120;

/// Validate the warranty length in months (0–120 inclusive).
pub fn validate_warranty(months: i32) -> Result<(), CoreError> {
    if !(WARRANTY_MIN_MONTHS..=WARRANTY_MAX_MONTHS).contains(&months) {
        return Err(CoreError::Validation(format!(
            "Warranty must be between {WARRANTY_MIN_MONTHS} and {WARRANTY_MAX_MONTHS} months, got {months}"
        )));
    }
    Ok(())
}

/// Validate that the warranty expiry lies strictly in the future.
pub fn validate_warranty_expiry(expiry: Date, today: Date) -> Result<(), CoreError> {
    if expiry <= today {
        return Err(CoreError::Validation(
            "Warranty expiry must be in the future".to_string(),
        ));
    }
    Ok(())
}

/// Run all create-time field checks.
pub fn validate_new_asset(warranty: i32, warranty_expiry: Date, today: Date) -> Result<(), CoreError> {
    validate_warranty(warranty)?;
    validate_warranty_expiry(warranty_expiry, today)?;
    Ok(())
}
