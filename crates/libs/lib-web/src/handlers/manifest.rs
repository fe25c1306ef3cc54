//! # Actions Manifest Handler
//!
//! `GET /actions.json` tells Blink renderers that `/swap` and `/dynamic-swap`
//! on this host (and anything below them) are backed by the action API.

use crate::routes::actions_manifest;
use axum::Json;
use lib_core::dto::ActionsManifest;

pub async fn get_actions_manifest() -> Json<ActionsManifest> {
    Json(actions_manifest())
}
