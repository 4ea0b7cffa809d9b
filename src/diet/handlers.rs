use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::session::SessionUser,
    diet::{
        dto::{CreateEntryRequest, EntryResponse, UpdateEntryRequest},
        metrics::{self, DietMetrics},
        repo::DietEntry,
    },
    error::ApiError,
    state::AppState,
};

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn list_entries(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = DietEntry::list_by_user(&state.db, user.0.id).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.0.id))]
pub async fn create_entry(
    State(state): State<AppState>,
    user: SessionUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<StatusCode, ApiError> {
    let entry = DietEntry::create(
        &state.db,
        Uuid::new_v4(),
        user.0.id,
        &payload.name,
        &payload.description,
        payload.is_diet,
    )
    .await
    .map_err(|e| {
        error!(error = %e, "create entry failed");
        ApiError::Persistence("Erro ao criar refeição".into())
    })?;

    info!(entry_id = %entry.id, "entry created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_entry(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = DietEntry::find_owned(&state.db, user.0.id, id)
        .await?
        .ok_or_else(|| {
            warn!(%id, "entry not found");
            ApiError::NotFound("Refeição não encontrada".into())
        })?;

    Ok(Json(entry.into()))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.0.id))]
pub async fn update_entry(
    State(state): State<AppState>,
    user: SessionUser,
    Json(payload): Json<UpdateEntryRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let updated = DietEntry::update_owned(
        &state.db,
        user.0.id,
        payload.id,
        &payload.name,
        &payload.description,
        payload.is_diet,
    )
    .await?;

    // An update that matched no owned row is reported as not-found rather
    // than a zero count, so the caller can tell the two outcomes apart.
    let entry = updated.ok_or_else(|| {
        warn!(entry_id = %payload.id, "update matched no rows");
        ApiError::NotFound("Refeição não encontrada".into())
    })?;

    info!(entry_id = %entry.id, "entry updated");
    Ok(Json(entry.into()))
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn delete_entry(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<Uuid>,
) -> Result<&'static str, ApiError> {
    let removed = DietEntry::delete_owned(&state.db, user.0.id, id)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "delete entry failed");
            ApiError::Persistence("Erro ao deletar refeição".into())
        })?;

    if removed == 0 {
        warn!(%id, "delete entry matched no rows");
        return Err(ApiError::Persistence("Erro ao deletar refeição".into()));
    }

    info!(entry_id = %id, "entry deleted");
    Ok("Refeição deletada com sucesso")
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_metrics(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<DietMetrics>, ApiError> {
    let flags = DietEntry::diet_flags_by_user(&state.db, user.0.id).await?;
    Ok(Json(metrics::compute(&flags)))
}
