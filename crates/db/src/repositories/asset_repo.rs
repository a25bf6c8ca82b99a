//! Repository for the `assets` table.
//!
//! All lookups that serve the API address rows by the display identifier
//! (`asset_id`), not the internal sequence number. Filtering and pagination
//! for listing are pushed down to SQL.

use sqlx::PgPool;

use crate::models::asset::{Asset, AssetListParams, AssetStatus, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, asset_id, asset_name, value, purchase_date, \
    manufacturer, model, serial_number, supplier, \
    warranty, warranty_expiry, status, facility_name";

/// Default page size for asset listing.
const DEFAULT_LIMIT: i64 = 100;

/// Provides CRUD operations for asset records.
pub struct AssetRepo;

impl AssetRepo {
    /// Fetch the most recently inserted asset (highest internal id), if any.
    ///
    /// The display identifier of this row seeds the next-identifier
    /// derivation for a create.
    pub async fn find_latest(pool: &PgPool) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Asset>(&query).fetch_optional(pool).await
    }

    /// Check whether any asset already carries the given serial number.
    pub async fn serial_exists(pool: &PgPool, serial_number: &str) -> Result<bool, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM assets WHERE serial_number = $1")
                .bind(serial_number)
                .fetch_one(pool)
                .await?;
        Ok(count.0 > 0)
    }

    /// Insert a new asset row with the given (server-derived) display
    /// identifier and return the stored record.
    pub async fn insert(
        pool: &PgPool,
        asset_id: &str,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let status = input.status.unwrap_or(AssetStatus::Active);

        let query = format!(
            "INSERT INTO assets (\
                asset_id, asset_name, value, purchase_date, \
                manufacturer, model, serial_number, supplier, \
                warranty, warranty_expiry, status, facility_name\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id)
            .bind(&input.asset_name)
            .bind(input.value)
            .bind(input.purchase_date)
            .bind(&input.manufacturer)
            .bind(&input.model)
            .bind(&input.serial_number)
            .bind(&input.supplier)
            .bind(input.warranty)
            .bind(input.warranty_expiry)
            .bind(status)
            .bind(&input.facility_name)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by display identifier.
    pub async fn find_by_asset_id(
        pool: &PgPool,
        asset_id: &str,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE asset_id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update an asset addressed by display identifier.
    ///
    /// Only fields present in `input` change; the rest keep prior values.
    /// Returns `None` when no such asset exists.
    pub async fn update(
        pool: &PgPool,
        asset_id: &str,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                asset_name = COALESCE($2, asset_name), \
                value = COALESCE($3, value), \
                purchase_date = COALESCE($4, purchase_date), \
                manufacturer = COALESCE($5, manufacturer), \
                model = COALESCE($6, model), \
                serial_number = COALESCE($7, serial_number), \
                supplier = COALESCE($8, supplier), \
                warranty = COALESCE($9, warranty), \
                warranty_expiry = COALESCE($10, warranty_expiry), \
                status = COALESCE($11, status), \
                facility_name = COALESCE($12, facility_name) \
             WHERE asset_id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(asset_id)
            .bind(input.asset_name.as_deref())
            .bind(input.value)
            .bind(input.purchase_date)
            .bind(input.manufacturer.as_deref())
            .bind(input.model.as_deref())
            .bind(input.serial_number.as_deref())
            .bind(input.supplier.as_deref())
            .bind(input.warranty)
            .bind(input.warranty_expiry)
            .bind(input.status)
            .bind(input.facility_name.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by display identifier. Returns true if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, asset_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE asset_id = $1")
            .bind(asset_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List assets with optional exact-match filters and skip/limit
    /// pagination, in insertion order.
    pub async fn list(
        pool: &PgPool,
        params: &AssetListParams,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let skip = params.skip.unwrap_or(0);
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.facility.is_some() {
            conditions.push(format!("facility_name = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             {where_clause}\
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Asset>(&query);

        // Bind dynamic parameters in order.
        if let Some(status) = params.status {
            q = q.bind(status);
        }
        if let Some(ref facility) = params.facility {
            q = q.bind(facility.clone());
        }

        q = q.bind(limit).bind(skip);
        q.fetch_all(pool).await
    }

    /// Distinct facility names across all assets. Order unspecified.
    pub async fn distinct_facility_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT facility_name FROM assets")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
