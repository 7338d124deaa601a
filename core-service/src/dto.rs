use serde_json::Value;
use shared::{AppError, AppearanceResponse, CreateAppearanceRequest, EpisodeAppearance, EpisodeDetail};

use crate::models::{Appearance, Episode, EpisodeWithAppearances, Guest};

/// Checked in this order; the first missing one is reported.
pub const APPEARANCE_REQUIRED_FIELDS: [&str; 3] = ["rating", "episode_id", "guest_id"];

/// Parses a `POST /appearances` body. Only presence and integer conversion
/// are checked here; referenced records are checked by the handler.
pub fn parse_appearance_request(body: &Value) -> Result<CreateAppearanceRequest, AppError> {
    let object = body
        .as_object()
        .ok_or_else(|| AppError::validation("request body must be a JSON object"))?;

    if let Some(missing) = APPEARANCE_REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(AppError::validation(format!("{} is required", missing)));
    }

    Ok(CreateAppearanceRequest {
        rating: integer_field(&object["rating"], "rating")?,
        episode_id: integer_field(&object["episode_id"], "episode_id")?,
        guest_id: integer_field(&object["guest_id"], "guest_id")?,
    })
}

fn integer_field(value: &Value, field: &str) -> Result<i32, AppError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::validation(format!("{} must be an integer", field)))
}

pub fn episode_detail(found: &EpisodeWithAppearances) -> EpisodeDetail {
    EpisodeDetail {
        id: found.episode.id,
        date: found.episode.date.clone(),
        number: found.episode.number,
        appearances: found
            .appearances
            .iter()
            .map(|(appearance, guest)| EpisodeAppearance {
                id: appearance.id,
                rating: appearance.rating,
                episode_id: appearance.episode_id,
                guest_id: appearance.guest_id,
                guest: guest.into(),
            })
            .collect(),
    }
}

pub fn appearance_response(appearance: &Appearance, episode: &Episode, guest: &Guest) -> AppearanceResponse {
    AppearanceResponse {
        id: appearance.id,
        rating: appearance.rating,
        episode_id: appearance.episode_id,
        guest_id: appearance.guest_id,
        episode: episode.into(),
        guest: guest.into(),
    }
}
