use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::models::{Appearance, Episode, EpisodeWithAppearances, Guest};
use crate::schema::{appearances, episodes, guests};
use super::RepositoryError;

#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Episode>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError>;
    async fn find_with_appearances(
        &self,
        id: i32,
    ) -> Result<Option<EpisodeWithAppearances>, RepositoryError>;
    /// Removes the episode and every appearance on it in one transaction.
    /// Returns `false` when the episode does not exist.
    async fn delete_with_appearances(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub struct DieselEpisodeRepository {
    pool: DbPool,
}

impl DieselEpisodeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpisodeRepository for DieselEpisodeRepository {
    async fn find_all(&self) -> Result<Vec<Episode>, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<Episode>, RepositoryError> {
            let mut conn = pool.get()?;
            episodes::table
                .order(episodes::id.asc())
                .select(Episode::as_select())
                .load(&mut conn)
                .map_err(RepositoryError::from)
        })
        .await?
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<Episode>, RepositoryError> {
            let mut conn = pool.get()?;
            episodes::table
                .find(id)
                .select(Episode::as_select())
                .first(&mut conn)
                .optional()
                .map_err(RepositoryError::from)
        })
        .await?
    }

    async fn find_with_appearances(
        &self,
        id: i32,
    ) -> Result<Option<EpisodeWithAppearances>, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(
            move || -> Result<Option<EpisodeWithAppearances>, RepositoryError> {
                let mut conn = pool.get()?;
                let episode = episodes::table
                    .find(id)
                    .select(Episode::as_select())
                    .first(&mut conn)
                    .optional()?;

                let Some(episode) = episode else {
                    return Ok(None);
                };

                let appearances = Appearance::belonging_to(&episode)
                    .inner_join(guests::table)
                    .order(appearances::id.asc())
                    .select((Appearance::as_select(), Guest::as_select()))
                    .load::<(Appearance, Guest)>(&mut conn)?;

                Ok(Some(EpisodeWithAppearances {
                    episode,
                    appearances,
                }))
            },
        )
        .await?
    }

    async fn delete_with_appearances(&self, id: i32) -> Result<bool, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<bool, RepositoryError> {
            let mut conn = pool.get()?;
            conn.transaction::<_, RepositoryError, _>(|conn| {
                let exists = episodes::table
                    .find(id)
                    .select(episodes::id)
                    .first::<i32>(conn)
                    .optional()?;
                if exists.is_none() {
                    return Ok(false);
                }

                let removed = diesel::delete(appearances::table.filter(appearances::episode_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(episodes::table.find(id)).execute(conn)?;

                tracing::debug!("Episode {} removed along with {} appearances", id, removed);
                Ok(true)
            })
        })
        .await?
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    pub struct MockEpisodeRepository {
        pub episodes: Mutex<Vec<Episode>>,
        pub appearances: Mutex<Vec<(Appearance, Guest)>>,
        pub operations: Mutex<Vec<String>>,
        pub unavailable: bool,
    }

    impl MockEpisodeRepository {
        pub fn new() -> Self {
            Self::with_data(Vec::new(), Vec::new())
        }

        pub fn with_data(episodes: Vec<Episode>, appearances: Vec<(Appearance, Guest)>) -> Self {
            Self {
                episodes: Mutex::new(episodes),
                appearances: Mutex::new(appearances),
                operations: Mutex::new(Vec::new()),
                unavailable: false,
            }
        }

        /// Every call fails as if the pool could not hand out a connection.
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::new()
            }
        }

        pub fn get_operations(&self) -> Vec<String> {
            self.operations.lock().unwrap().clone()
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.unavailable {
                return Err(RepositoryError::Pool("connection refused".to_string()));
            }
            Ok(())
        }
    }

    impl Default for MockEpisodeRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl EpisodeRepository for MockEpisodeRepository {
        async fn find_all(&self) -> Result<Vec<Episode>, RepositoryError> {
            self.operations.lock().unwrap().push("find_all".to_string());
            self.check()?;
            Ok(self.episodes.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError> {
            self.operations.lock().unwrap().push(format!("find_by_id:{}", id));
            self.check()?;
            Ok(self.episodes.lock().unwrap().iter().find(|e| e.id == id).cloned())
        }

        async fn find_with_appearances(
            &self,
            id: i32,
        ) -> Result<Option<EpisodeWithAppearances>, RepositoryError> {
            self.operations
                .lock()
                .unwrap()
                .push(format!("find_with_appearances:{}", id));
            self.check()?;
            let episode = self.episodes.lock().unwrap().iter().find(|e| e.id == id).cloned();
            Ok(episode.map(|episode| EpisodeWithAppearances {
                appearances: self
                    .appearances
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|(a, _)| a.episode_id == id)
                    .cloned()
                    .collect(),
                episode,
            }))
        }

        async fn delete_with_appearances(&self, id: i32) -> Result<bool, RepositoryError> {
            self.operations.lock().unwrap().push(format!("delete:{}", id));
            self.check()?;
            let mut episodes = self.episodes.lock().unwrap();
            let len_before = episodes.len();
            episodes.retain(|e| e.id != id);
            if episodes.len() == len_before {
                return Ok(false);
            }
            self.appearances
                .lock()
                .unwrap()
                .retain(|(a, _)| a.episode_id != id);
            Ok(true)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn fixture() -> MockEpisodeRepository {
            let guest = Guest {
                id: 1,
                name: "David Bowie".to_string(),
                occupation: "musician".to_string(),
            };
            MockEpisodeRepository::with_data(
                vec![
                    Episode { id: 1, date: "1/11/99".to_string(), number: 1 },
                    Episode { id: 2, date: "1/12/99".to_string(), number: 2 },
                ],
                vec![
                    (Appearance { id: 1, rating: 4, episode_id: 1, guest_id: 1 }, guest.clone()),
                    (Appearance { id: 2, rating: 2, episode_id: 2, guest_id: 1 }, guest),
                ],
            )
        }

        #[tokio::test]
        async fn test_mock_episode_repository_find() {
            let repo = fixture();

            assert_eq!(repo.find_all().await.unwrap().len(), 2);
            let episode = repo.find_by_id(2).await.unwrap().unwrap();
            assert_eq!(episode.date, "1/12/99");
            assert!(repo.find_by_id(3).await.unwrap().is_none());

            assert_eq!(repo.get_operations(), vec!["find_all", "find_by_id:2", "find_by_id:3"]);
        }

        #[tokio::test]
        async fn test_mock_episode_repository_find_with_appearances() {
            let repo = fixture();

            let found = repo.find_with_appearances(1).await.unwrap().unwrap();
            assert_eq!(found.episode.number, 1);
            assert_eq!(found.appearances.len(), 1);
            assert_eq!(found.appearances[0].0.rating, 4);

            assert!(repo.find_with_appearances(999).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_mock_episode_repository_delete_drops_appearances() {
            let repo = fixture();

            assert!(repo.delete_with_appearances(1).await.unwrap());
            assert!(!repo.delete_with_appearances(1).await.unwrap());

            let remaining = repo.appearances.lock().unwrap();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].0.episode_id, 2);
        }

        #[tokio::test]
        async fn test_mock_episode_repository_unavailable() {
            let repo = MockEpisodeRepository::unavailable();
            assert!(matches!(repo.find_all().await, Err(RepositoryError::Pool(_))));
        }
    }
}
