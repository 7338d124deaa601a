use serde::{Deserialize, Serialize};

// ============ Episodes ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: i32,
    pub date: String,
    pub number: i32,
}

/// `GET /episodes/:id` body: the episode plus every appearance with its guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    pub id: i32,
    pub date: String,
    pub number: i32,
    pub appearances: Vec<EpisodeAppearance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeAppearance {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub guest: GuestSummary,
}

// ============ Guests ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSummary {
    pub id: i32,
    pub name: String,
    pub occupation: String,
}

// ============ Appearances ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppearanceRequest {
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
}

/// `POST /appearances` body on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceResponse {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
    pub episode: EpisodeSummary,
    pub guest: GuestSummary,
}

// ============ Errors ============

/// Single-message error body used by the episode routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// List-shaped error body used by `POST /appearances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorListResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Best-effort message from an API error body of either shape.
pub fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyError {
        List(ErrorListResponse),
        Single(ErrorResponse),
    }

    match serde_json::from_str::<AnyError>(body).ok()? {
        AnyError::List(list) => Some(list.errors.join("; ")),
        AnyError::Single(single) => Some(single.error),
    }
}
