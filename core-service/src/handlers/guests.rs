use axum::{extract::State, Json};
use shared::{AppError, GuestSummary};

use crate::state::AppState;

/// List all guests
pub async fn list_guests(State(state): State<AppState>) -> Result<Json<Vec<GuestSummary>>, AppError> {
    let guests = state.repos.guest.find_all().await.map_err(|e| {
        tracing::error!("Failed to list guests: {:?}", e);
        AppError::from(e)
    })?;

    let responses: Vec<GuestSummary> = guests.iter().map(GuestSummary::from).collect();
    tracing::info!("Listed {} guests", responses.len());
    Ok(Json(responses))
}
