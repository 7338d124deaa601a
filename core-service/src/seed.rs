//! Fixture data for local development.

use diesel::prelude::*;

use crate::db::{DbPool, RepositoryError};
use crate::models::{Episode, Guest, NewAppearance, NewEpisode, NewGuest};
use crate::schema::{appearances, episodes, guests};

const EPISODES: [(&str, i32); 5] = [
    ("1/11/99", 1),
    ("1/12/99", 2),
    ("1/13/99", 3),
    ("1/14/99", 4),
    ("1/15/99", 5),
];

const GUESTS: [(&str, &str); 5] = [
    ("Michael J. Fox", "actor"),
    ("Sandra Bernhard", "Comedian"),
    ("Tracey Ullman", "television actress"),
    ("John Malkovich", "actor"),
    ("David Bowie", "musician"),
];

/// (rating, index into EPISODES, index into GUESTS)
const APPEARANCES: [(i32, usize, usize); 7] = [
    (4, 0, 0),
    (5, 0, 1),
    (3, 1, 2),
    (5, 1, 3),
    (2, 2, 4),
    (4, 3, 0),
    (5, 4, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub episodes: usize,
    pub guests: usize,
    pub appearances: usize,
}

/// Wipes all three tables and inserts the fixtures in one transaction.
pub fn seed_database(pool: &DbPool) -> Result<SeedSummary, RepositoryError> {
    let mut conn = pool.get()?;
    conn.transaction::<_, RepositoryError, _>(|conn| {
        diesel::delete(appearances::table).execute(conn)?;
        diesel::delete(episodes::table).execute(conn)?;
        diesel::delete(guests::table).execute(conn)?;

        let inserted_episodes = EPISODES
            .iter()
            .map(|(date, number)| {
                diesel::insert_into(episodes::table)
                    .values(NewEpisode {
                        date: date.to_string(),
                        number: *number,
                    })
                    .returning(Episode::as_returning())
                    .get_result(conn)
            })
            .collect::<Result<Vec<Episode>, _>>()?;

        let inserted_guests = GUESTS
            .iter()
            .map(|(name, occupation)| {
                diesel::insert_into(guests::table)
                    .values(NewGuest {
                        name: name.to_string(),
                        occupation: occupation.to_string(),
                    })
                    .returning(Guest::as_returning())
                    .get_result(conn)
            })
            .collect::<Result<Vec<Guest>, _>>()?;

        let new_appearances: Vec<NewAppearance> = APPEARANCES
            .iter()
            .map(|(rating, episode, guest)| NewAppearance {
                rating: *rating,
                episode_id: inserted_episodes[*episode].id,
                guest_id: inserted_guests[*guest].id,
            })
            .collect();
        let appearance_count = diesel::insert_into(appearances::table)
            .values(&new_appearances)
            .execute(conn)?;

        Ok(SeedSummary {
            episodes: inserted_episodes.len(),
            guests: inserted_guests.len(),
            appearances: appearance_count,
        })
    })
}
