//! Diesel repositories and seeding against a real SQLite file.

mod common;

use common::TestDb;
use diesel::prelude::*;
use late_show_api::db::repository::RepositoryError;
use late_show_api::db::{
    AppearanceRepository, DieselAppearanceRepository, DieselEpisodeRepository,
    DieselGuestRepository, EpisodeRepository, GuestRepository,
};
use late_show_api::models::NewAppearance;
use late_show_api::schema::appearances;
use late_show_api::seed::{seed_database, SeedSummary};

#[test]
fn test_seed_is_repeatable() {
    let db = TestDb::empty();

    let expected = SeedSummary {
        episodes: 5,
        guests: 5,
        appearances: 7,
    };
    assert_eq!(seed_database(&db.pool).unwrap(), expected);
    assert_eq!(seed_database(&db.pool).unwrap(), expected);

    let mut conn = db.pool.get().unwrap();
    let ids: Vec<i32> = appearances::table
        .select(appearances::episode_id)
        .order(appearances::id.asc())
        .load(&mut conn)
        .unwrap();
    assert_eq!(ids, vec![1, 1, 2, 2, 3, 4, 5]);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = TestDb::empty();
    assert_eq!(late_show_api::db::run_migrations(&db.pool).unwrap(), 0);
}

fn appearance_count(db: &TestDb, episode_id: i32) -> i64 {
    let mut conn = db.pool.get().unwrap();
    appearances::table
        .filter(appearances::episode_id.eq(episode_id))
        .count()
        .get_result(&mut conn)
        .unwrap()
}

#[tokio::test]
async fn test_episode_repository_find() {
    let db = TestDb::seeded();
    let repo = DieselEpisodeRepository::new(db.pool.clone());

    let found = repo.find_by_id(2).await.unwrap().unwrap();
    assert_eq!(found.date, "1/12/99");
    assert_eq!(found.number, 2);

    let detail = repo.find_with_appearances(2).await.unwrap().unwrap();
    assert_eq!(detail.episode, found);
    let guests: Vec<&str> = detail.appearances.iter().map(|(_, g)| g.name.as_str()).collect();
    assert_eq!(guests, vec!["Tracey Ullman", "John Malkovich"]);

    assert!(repo.find_by_id(6).await.unwrap().is_none());
    assert!(repo.find_with_appearances(6).await.unwrap().is_none());
}

#[tokio::test]
async fn test_episode_repository_empty_store() {
    let db = TestDb::empty();
    let repo = DieselEpisodeRepository::new(db.pool.clone());

    assert!(repo.find_all().await.unwrap().is_empty());
    assert!(!repo.delete_with_appearances(1).await.unwrap());
}

#[tokio::test]
async fn test_episode_repository_delete_removes_only_its_appearances() {
    let db = TestDb::seeded();
    let episodes = DieselEpisodeRepository::new(db.pool.clone());

    assert!(episodes.delete_with_appearances(1).await.unwrap());
    assert!(!episodes.delete_with_appearances(1).await.unwrap());

    assert_eq!(appearance_count(&db, 1), 0);
    assert_eq!(appearance_count(&db, 2), 2);
    assert_eq!(episodes.find_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_appearance_repository_rejects_dangling_references() {
    let db = TestDb::seeded();
    let repo = DieselAppearanceRepository::new(db.pool.clone());

    let result = repo
        .create(NewAppearance {
            rating: 3,
            episode_id: 4242,
            guest_id: 1,
        })
        .await;
    match result {
        Err(e @ RepositoryError::Database(_)) => assert!(e.is_constraint_violation()),
        other => panic!("expected foreign key violation, got {:?}", other),
    }

    assert_eq!(appearance_count(&db, 4242), 0);
}

#[tokio::test]
async fn test_appearance_repository_create() {
    let db = TestDb::seeded();
    let repo = DieselAppearanceRepository::new(db.pool.clone());

    let created = repo
        .create(NewAppearance {
            rating: 1,
            episode_id: 5,
            guest_id: 4,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 8);
    assert_eq!((created.episode_id, created.guest_id), (5, 4));
    assert_eq!(appearance_count(&db, 5), 2);
}

#[tokio::test]
async fn test_guest_repository_find() {
    let db = TestDb::seeded();
    let repo = DieselGuestRepository::new(db.pool.clone());

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names[0], "Michael J. Fox");
    assert_eq!(names.len(), 5);

    let bowie = repo.find_by_id(5).await.unwrap().unwrap();
    assert_eq!(bowie.occupation, "musician");
    assert!(repo.find_by_id(99).await.unwrap().is_none());
}
