use std::sync::atomic::{AtomicUsize, Ordering};

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub mod repository;

pub use repository::{
    AppearanceRepository, DieselAppearanceRepository, DieselEpisodeRepository,
    DieselGuestRepository, EpisodeRepository, GuestRepository, RepositoryError,
};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection SQLite settings. Foreign keys are off by default in SQLite.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn establish_connection_pool(database_path: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let in_memory = is_in_memory(database_path);
    let database_url = if in_memory {
        shared_memory_url()
    } else {
        database_path.to_string()
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: 5_000,
        }));

    // A shared in-memory database only lives while one of its connections is open.
    if in_memory {
        builder = builder
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = builder
        .build(manager)
        .map_err(|e| anyhow::anyhow!("Failed to create connection pool: {}", e))?;

    Ok(pool)
}

fn is_in_memory(database_path: &str) -> bool {
    database_path == ":memory:" || database_path.starts_with("file::memory:")
}

/// Plain `:memory:` gives every connection its own empty database, so each
/// pool gets a uniquely named shared-cache database instead.
fn shared_memory_url() -> String {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
    format!(
        "file:late-show-{}-{}?mode=memory&cache=shared",
        std::process::id(),
        NEXT_ID.fetch_add(1, Ordering::Relaxed)
    )
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<usize> {
    let mut conn = pool
        .get()
        .map_err(|e| anyhow::anyhow!("Failed to get connection from pool: {}", e))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(applied.len())
}
