//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{Zone, ZoneCreate, ZoneUpdate};
use shared::response::MutationResponse;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /zones - full collection in insertion order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Zone>> {
    Json(state.zones.list().await)
}

/// GET /zones/{id} - single zone, matched by legacy id or zoneId
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Zone>> {
    let zone = state
        .zones
        .find(&id)
        .await
        .ok_or_else(|| AppError::not_found("Zone non trouvée"))?;
    Ok(Json(zone))
}

/// POST /zones - create a zone
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let zone = state.zones.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Zone ajoutée", zone)),
    ))
}

/// PUT /zones/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<MutationResponse>> {
    let zone = state.zones.update(&id, payload).await?;
    Ok(Json(MutationResponse::new("Zone mise à jour", zone)))
}

/// DELETE /zones/{id} - remove a zone
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MutationResponse>> {
    let zone = state.zones.delete(&id).await?;
    Ok(Json(MutationResponse::new("Zone supprimée", zone)))
}
