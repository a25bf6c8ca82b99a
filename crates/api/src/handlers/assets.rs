//! Handlers for the asset resource.
//!
//! Create/read/update/delete plus the facility-name and filtered listing
//! queries. Creation owns the display-identifier derivation and the
//! duplicate-serial rejection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use assets_core::asset_id::next_asset_id;
use assets_core::error::CoreError;
use assets_core::validation::{validate_new_asset, validate_warranty};
use assets_db::models::asset::{AssetListParams, CreateAsset, UpdateAsset};
use assets_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireStaff};
use crate::state::AppState;

/// Response payload for the facility-name listing.
#[derive(Debug, Serialize)]
pub struct FacilityNamesResponse {
    pub facility_names: Vec<String>,
}

/// POST /api/assets/addAsset
///
/// Create a new asset. The display identifier is derived from the most
/// recently inserted row; the derivation is read-then-write and not
/// serialized, so a concurrent create losing the race surfaces as a
/// unique-constraint conflict. Requires ADMIN or STAFF.
pub async fn create_asset(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    validate_new_asset(input.warranty, input.warranty_expiry, today)?;

    if AssetRepo::serial_exists(&state.pool, &input.serial_number).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Asset with this Serial Number already exists".into(),
        )));
    }

    let latest = AssetRepo::find_latest(&state.pool).await?;
    let asset_id = next_asset_id(latest.as_ref().map(|a| a.asset_id.as_str()));

    let asset = AssetRepo::insert(&state.pool, &asset_id, &input).await?;

    tracing::info!(
        asset_id = %asset.asset_id,
        serial_number = %asset.serial_number,
        user = %user.username,
        "Asset created",
    );

    Ok((StatusCode::CREATED, Json(asset)))
}

/// PATCH /api/assets/{id}
///
/// Partially update an asset by display identifier: only the supplied
/// fields change. A supplied warranty must be in range; the warranty
/// expiry is not re-checked, since an existing record may legally carry
/// one that has since passed. Requires ADMIN or STAFF.
pub async fn update_asset(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    if let Some(warranty) = input.warranty {
        validate_warranty(warranty)?;
    }

    let asset = AssetRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Asset",
                id: id.clone(),
            })
        })?;

    tracing::info!(asset_id = %id, user = %user.username, "Asset updated");

    Ok(Json(asset))
}

/// DELETE /api/assets/{id}
///
/// Delete an asset by display identifier. Admin only.
pub async fn delete_asset(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssetRepo::delete(&state.pool, &id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = %id, user = %user.username, "Asset deleted");

    Ok(Json(serde_json::json!({
        "message": "Asset deleted successfully"
    })))
}

/// GET /api/assets/{id}
///
/// Fetch a single asset by display identifier.
pub async fn get_asset(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_asset_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(asset))
}

/// GET /api/assets/facility/names
///
/// Distinct facility names across all assets, order unspecified.
pub async fn facility_names(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let facility_names = AssetRepo::distinct_facility_names(&state.pool).await?;

    Ok(Json(FacilityNamesResponse { facility_names }))
}

/// GET /api/assets/get/all?skip&limit&status&facility
///
/// List assets with optional exact-match status/facility filters and
/// skip/limit pagination.
pub async fn list_assets(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<AssetListParams>,
) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list(&state.pool, &params).await?;

    Ok(Json(assets))
}
