use crate::db::{
    AppearanceRepository, DbPool, DieselAppearanceRepository, DieselEpisodeRepository,
    DieselGuestRepository, EpisodeRepository, GuestRepository,
};
use std::sync::Arc;

pub struct Repositories {
    pub episode: Arc<dyn EpisodeRepository>,
    pub guest: Arc<dyn GuestRepository>,
    pub appearance: Arc<dyn AppearanceRepository>,
}

impl Repositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            episode: Arc::new(DieselEpisodeRepository::new(pool.clone())),
            guest: Arc::new(DieselGuestRepository::new(pool.clone())),
            appearance: Arc::new(DieselAppearanceRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<Repositories>,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self {
            repos: Arc::new(Repositories::new(db)),
        }
    }
}

#[cfg(test)]
impl Repositories {
    pub fn with_mocks(
        episode: Arc<dyn EpisodeRepository>,
        guest: Arc<dyn GuestRepository>,
        appearance: Arc<dyn AppearanceRepository>,
    ) -> Self {
        Self {
            episode,
            guest,
            appearance,
        }
    }
}

#[cfg(test)]
impl AppState {
    pub fn from_repositories(repos: Repositories) -> Self {
        Self {
            repos: Arc::new(repos),
        }
    }
}
