use diesel::prelude::*;
use shared::{EpisodeSummary, GuestSummary};

use crate::schema::{appearances, episodes, guests};

// ============ Episodes ============
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = episodes)]
pub struct Episode {
    pub id: i32,
    pub date: String,
    pub number: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = episodes)]
pub struct NewEpisode {
    pub date: String,
    pub number: i32,
}

impl From<&Episode> for EpisodeSummary {
    fn from(episode: &Episode) -> Self {
        EpisodeSummary {
            id: episode.id,
            date: episode.date.clone(),
            number: episode.number,
        }
    }
}

// ============ Guests ============
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = guests)]
pub struct Guest {
    pub id: i32,
    pub name: String,
    pub occupation: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = guests)]
pub struct NewGuest {
    pub name: String,
    pub occupation: String,
}

impl From<&Guest> for GuestSummary {
    fn from(guest: &Guest) -> Self {
        GuestSummary {
            id: guest.id,
            name: guest.name.clone(),
            occupation: guest.occupation.clone(),
        }
    }
}

// ============ Appearances ============
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(table_name = appearances)]
#[diesel(belongs_to(Episode))]
#[diesel(belongs_to(Guest))]
pub struct Appearance {
    pub id: i32,
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = appearances)]
pub struct NewAppearance {
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
}

/// An episode together with its appearances, each joined to its guest.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeWithAppearances {
    pub episode: Episode,
    pub appearances: Vec<(Appearance, Guest)>,
}
