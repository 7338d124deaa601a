use axum::{
    routing::{get, post},
    Router,
};
use shared::routes;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the HTTP surface. CORS is applied by the caller.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index::index))
        .route(routes::HEALTH, get(handlers::index::health_check))

        // Episodes
        .route(routes::EPISODES, get(handlers::episodes::list_episodes))
        .route(
            routes::EPISODE_DETAIL,
            get(handlers::episodes::get_episode).delete(handlers::episodes::delete_episode),
        )

        // Guests
        .route(routes::GUESTS, get(handlers::guests::list_guests))

        // Appearances
        .route(routes::APPEARANCES, post(handlers::appearances::create_appearance))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
