use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{AppError, EpisodeDetail, EpisodeSummary};

use crate::dto::episode_detail;
use crate::state::AppState;

pub const EPISODE_NOT_FOUND: &str = "Episode not found";

/// List all episodes
pub async fn list_episodes(
    State(state): State<AppState>,
) -> Result<Json<Vec<EpisodeSummary>>, AppError> {
    let episodes = state.repos.episode.find_all().await.map_err(|e| {
        tracing::error!("Failed to list episodes: {:?}", e);
        AppError::from(e)
    })?;

    let responses: Vec<EpisodeSummary> = episodes.iter().map(EpisodeSummary::from).collect();
    tracing::info!("Listed {} episodes", responses.len());
    Ok(Json(responses))
}

/// Get an episode with its appearances and their guests
pub async fn get_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<i32>,
) -> Result<Json<EpisodeDetail>, AppError> {
    match state.repos.episode.find_with_appearances(episode_id).await {
        Ok(Some(found)) => {
            tracing::info!(
                "Retrieved episode {} with {} appearances",
                episode_id,
                found.appearances.len()
            );
            Ok(Json(episode_detail(&found)))
        }
        Ok(None) => {
            tracing::warn!("Episode not found: {}", episode_id);
            Err(AppError::NotFound(EPISODE_NOT_FOUND.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to get episode {}: {:?}", episode_id, e);
            Err(e.into())
        }
    }
}

/// Delete an episode and its appearances
pub async fn delete_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    match state.repos.episode.delete_with_appearances(episode_id).await {
        Ok(true) => {
            tracing::info!("Deleted episode: {}", episode_id);
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => {
            tracing::warn!("Episode not found for deletion: {}", episode_id);
            Err(AppError::NotFound(EPISODE_NOT_FOUND.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to delete episode {}: {:?}", episode_id, e);
            Err(e.into())
        }
    }
}
