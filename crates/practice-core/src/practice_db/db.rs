//! SQLite-backed practice store implementation.
//!
//! Handles connection, migrations, and timestamp helpers. Practice CRUD lives
//! in `practices`, score records in `scores`.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::StoreResult;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed practice store.
///
/// The database file lives under the XDG state directory:
/// `~/.local/state/practice/practice.db`.
#[derive(Clone)]
pub struct PracticeDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl PracticeDb {
    /// Open (or create) the default store and run migrations.
    pub async fn open_default() -> StoreResult<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("practice")?;
        let db_path = xdg_dirs.get_state_home().join("practice.db");
        Self::open_at(&db_path).await
    }

    /// Open (or create) the store at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let db = PracticeDb { pool };
        db.migrate().await?;
        tracing::debug!("opened practice store at {}", path.display());
        Ok(db)
    }

    async fn migrate(&self) -> StoreResult<()> {
        // - `display` holds the resource-library display code.
        // - `displayoptions` and `parameters` are JSON; parameters keep their order.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS practice (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                course INTEGER NOT NULL,
                name TEXT NOT NULL,
                intro TEXT NOT NULL DEFAULT '',
                duedate TEXT NOT NULL DEFAULT '',
                externalurl TEXT NOT NULL,
                display INTEGER NOT NULL DEFAULT 0,
                displayoptions TEXT NOT NULL DEFAULT '{}',
                parameters TEXT NOT NULL DEFAULT '[]',
                timemodified INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS student_record (
                username TEXT NOT NULL,
                practiceid INTEGER NOT NULL,
                score REAL NOT NULL,
                timemodified INTEGER NOT NULL,
                PRIMARY KEY (username, practiceid)
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS student (
                username TEXT PRIMARY KEY,
                firstname TEXT NOT NULL DEFAULT '',
                lastname TEXT NOT NULL DEFAULT ''
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds.
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory store for tests (no disk I/O).
pub(crate) async fn open_memory() -> StoreResult<PracticeDb> {
    // Single connection so the pool never hands back a different empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = PracticeDb { pool };
    db.migrate().await?;
    Ok(db)
}
