//! Asset entity and request DTOs.

use assets_core::types::{Date, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Asset lifecycle status. Stored as TEXT; new assets default to ACTIVE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Active,
    Inactive,
}

/// A row from the `assets` table.
///
/// `id` is the storage-assigned internal sequence number and is never exposed
/// over the API; clients address assets by `asset_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub asset_id: String,
    pub asset_name: String,
    pub value: Decimal,
    pub purchase_date: Date,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub supplier: String,
    pub warranty: i32,
    pub warranty_expiry: Date,
    pub status: AssetStatus,
    pub facility_name: String,
}

/// DTO for creating an asset. The display identifier is derived server-side
/// and must not be supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub asset_name: String,
    pub value: Decimal,
    pub purchase_date: Date,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub supplier: String,
    pub warranty: i32,
    pub warranty_expiry: Date,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    pub facility_name: String,
}

/// DTO for partially updating an asset. Omitted fields keep their prior
/// values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAsset {
    pub asset_name: Option<String>,
    pub value: Option<Decimal>,
    pub purchase_date: Option<Date>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub supplier: Option<String>,
    pub warranty: Option<i32>,
    pub warranty_expiry: Option<Date>,
    pub status: Option<AssetStatus>,
    pub facility_name: Option<String>,
}

/// Query parameters for listing assets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetListParams {
    /// Number of records to skip (default 0).
    pub skip: Option<i64>,
    /// Maximum number of records to return (default 100).
    pub limit: Option<i64>,
    /// Exact-match status filter.
    pub status: Option<AssetStatus>,
    /// Exact-match facility name filter.
    pub facility: Option<String>,
}
