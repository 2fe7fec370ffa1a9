//! Helpers for integration tests.

use chrono::NaiveDateTime;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use aquadesk::db::{DbPool, establish_connection_pool};
use aquadesk::domain::user::{NewUser, User};
use aquadesk::repository::{DieselRepository, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Inserts a user with the given role and returns the stored row.
#[allow(dead_code)]
pub fn seed_user(repo: &DieselRepository, username: &str, role: &str) -> User {
    let new_user = NewUser::new(
        username,
        format!("{username}@example.com"),
        "$2b$04$placeholderhashvalue00000000000000000000000000000000",
        role,
        format!("Test {username}"),
    );
    repo.create_user(&new_user).expect("Failed to seed user")
}

/// A fixed timestamp for deterministic assertions.
#[allow(dead_code)]
pub fn fixed_datetime(day: u32, hour: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 8, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}
