use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::models::{Appearance, NewAppearance};
use crate::schema::appearances;
use super::RepositoryError;

#[async_trait]
pub trait AppearanceRepository: Send + Sync {
    /// Inserts inside a transaction; a failed insert leaves nothing behind.
    async fn create(&self, new_appearance: NewAppearance) -> Result<Appearance, RepositoryError>;
}

pub struct DieselAppearanceRepository {
    pool: DbPool,
}

impl DieselAppearanceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppearanceRepository for DieselAppearanceRepository {
    async fn create(&self, new_appearance: NewAppearance) -> Result<Appearance, RepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Appearance, RepositoryError> {
            let mut conn = pool.get()?;
            conn.transaction::<_, RepositoryError, _>(|conn| {
                diesel::insert_into(appearances::table)
                    .values(&new_appearance)
                    .returning(Appearance::as_returning())
                    .get_result(conn)
                    .map_err(RepositoryError::from)
            })
        })
        .await?
    }
}
