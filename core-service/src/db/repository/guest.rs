use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::models::Guest;
use crate::schema::guests;
use super::RepositoryError;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Guest>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Guest>, RepositoryError>;
}

pub struct DieselGuestRepository {
    pool: DbPool,
}

impl DieselGuestRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for DieselGuestRepository {
    async fn find_all(&self) -> Result<Vec<Guest>, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<Guest>, RepositoryError> {
            let mut conn = pool.get()?;
            guests::table
                .order(guests::id.asc())
                .select(Guest::as_select())
                .load(&mut conn)
                .map_err(RepositoryError::from)
        })
        .await?
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Guest>, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<Guest>, RepositoryError> {
            let mut conn = pool.get()?;
            guests::table
                .find(id)
                .select(Guest::as_select())
                .first(&mut conn)
                .optional()
                .map_err(RepositoryError::from)
        })
        .await?
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    pub struct MockGuestRepository {
        pub guests: Mutex<Vec<Guest>>,
        pub operations: Mutex<Vec<String>>,
    }

    impl MockGuestRepository {
        pub fn new() -> Self {
            Self::with_data(Vec::new())
        }

        pub fn with_data(guests: Vec<Guest>) -> Self {
            Self {
                guests: Mutex::new(guests),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<String> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl Default for MockGuestRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl GuestRepository for MockGuestRepository {
        async fn find_all(&self) -> Result<Vec<Guest>, RepositoryError> {
            self.operations.lock().unwrap().push("find_all".to_string());
            Ok(self.guests.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Guest>, RepositoryError> {
            self.operations.lock().unwrap().push(format!("find_by_id:{}", id));
            Ok(self.guests.lock().unwrap().iter().find(|g| g.id == id).cloned())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_guest_repository_find() {
            let repo = MockGuestRepository::with_data(vec![Guest {
                id: 1,
                name: "Tracey Ullman".to_string(),
                occupation: "television actress".to_string(),
            }]);

            let found = repo.find_by_id(1).await.unwrap();
            assert_eq!(found.map(|g| g.name), Some("Tracey Ullman".to_string()));
            assert!(repo.find_by_id(2).await.unwrap().is_none());
            assert_eq!(repo.find_all().await.unwrap().len(), 1);

            assert_eq!(
                repo.get_operations(),
                vec!["find_by_id:1", "find_by_id:2", "find_all"]
            );
        }
    }
}
