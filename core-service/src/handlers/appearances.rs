use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use shared::{AppError, AppearanceResponse};

use crate::dto::{appearance_response, parse_appearance_request};
use crate::models::NewAppearance;
use crate::state::AppState;

pub const GUEST_NOT_FOUND: &str = "Guest not found";

/// Create an appearance linking an existing episode and guest
pub async fn create_appearance(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AppearanceResponse>), AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("Rejected appearance body: {}", rejection.body_text());
        AppError::validation(rejection.body_text())
    })?;

    let request = parse_appearance_request(&body).map_err(|e| {
        tracing::warn!("Invalid appearance request: {}", e);
        e
    })?;

    let episode = state
        .repos
        .episode
        .find_by_id(request.episode_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Appearance references missing episode {}", request.episode_id);
            AppError::MissingReference(super::episodes::EPISODE_NOT_FOUND.to_string())
        })?;

    let guest = state
        .repos
        .guest
        .find_by_id(request.guest_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Appearance references missing guest {}", request.guest_id);
            AppError::MissingReference(GUEST_NOT_FOUND.to_string())
        })?;

    let new_appearance = NewAppearance {
        rating: request.rating,
        episode_id: episode.id,
        guest_id: guest.id,
    };

    match state.repos.appearance.create(new_appearance).await {
        Ok(appearance) => {
            tracing::info!(
                "Created appearance {} (episode {}, guest {})",
                appearance.id,
                episode.id,
                guest.id
            );
            Ok((
                StatusCode::CREATED,
                Json(appearance_response(&appearance, &episode, &guest)),
            ))
        }
        Err(e) if e.is_constraint_violation() => {
            tracing::warn!("Appearance insert rolled back: {}", e);
            Err(e.into())
        }
        Err(e) => {
            tracing::error!("Failed to create appearance: {:?}", e);
            Err(e.into())
        }
    }
}
