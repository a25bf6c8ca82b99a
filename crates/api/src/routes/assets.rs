//! Asset resource routes.
//!
//! Route hierarchy (nested under `/api/assets`):
//!
//! ```text
//! /addAsset            create (ADMIN or STAFF)
//! /{id}                get (any authed), update (ADMIN or STAFF),
//!                      delete (ADMIN)
//! /facility/names      distinct facility names (any authed)
//! /get/all             filtered, paginated listing (any authed)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addAsset", post(assets::create_asset))
        .route("/facility/names", get(assets::facility_names))
        .route("/get/all", get(assets::list_assets))
        .route(
            "/{id}",
            get(assets::get_asset)
                .patch(assets::update_asset)
                .delete(assets::delete_asset),
        )
}
