//! Connection and schema.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::StoreError;
use crate::config::SwapiConfig;

/// Default database file: `~/.local/state/swapi/characters.db`.
pub fn default_db_path() -> Result<PathBuf, StoreError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("swapi")?;
    Ok(xdg_dirs.get_state_home().join("swapi").join("characters.db"))
}

/// Handle to the `characters` table.
///
/// The pool holds a single connection: the pipeline never has more than one
/// statement in flight.
#[derive(Clone)]
pub struct CharacterStore {
    pub(crate) pool: Pool<Sqlite>,
}

impl CharacterStore {
    /// Open the database named by the config (`database_url`), or the XDG default.
    pub async fn open_default(cfg: &SwapiConfig) -> Result<Self, StoreError> {
        match cfg.database_url.as_deref() {
            Some(url) => Self::open(url, cfg.echo_sql).await,
            None => Self::open_at(default_db_path()?, cfg.echo_sql).await,
        }
    }

    /// Open (or create) the database behind a sqlx connection string.
    pub async fn open(url: &str, echo_sql: bool) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        Self::connect(opts, echo_sql).await
    }

    /// Open (or create) the database file at `path`. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>, echo_sql: bool) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(opts, echo_sql).await
    }

    /// Read-only counterpart of `open_default`, for dumping.
    pub async fn open_default_read_only(cfg: &SwapiConfig) -> Result<Self, StoreError> {
        match cfg.database_url.as_deref() {
            Some(url) => Self::open_read_only(url, cfg.echo_sql).await,
            None => Self::open_at_read_only(default_db_path()?, cfg.echo_sql).await,
        }
    }

    /// Open an existing database read-only. Creates nothing and runs no migration,
    /// so a database that was never loaded is an error.
    pub async fn open_read_only(url: &str, echo_sql: bool) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::from_str(url)?
            .create_if_missing(false)
            .read_only(true);
        Self::connect_pool(opts, echo_sql).await
    }

    /// Open an existing database file read-only.
    pub async fn open_at_read_only(
        path: impl AsRef<Path>,
        echo_sql: bool,
    ) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(false)
            .read_only(true);
        Self::connect_pool(opts, echo_sql).await
    }

    async fn connect(opts: SqliteConnectOptions, echo_sql: bool) -> Result<Self, StoreError> {
        let store = Self::connect_pool(opts, echo_sql).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Connect without touching the schema.
    async fn connect_pool(
        opts: SqliteConnectOptions,
        echo_sql: bool,
    ) -> Result<Self, StoreError> {
        let opts = if echo_sql {
            opts
        } else {
            opts.disable_statement_logging()
        };
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        Ok(CharacterStore { pool })
    }

    pub(crate) async fn migrate(&self) -> Result<(), StoreError> {
        // Reference columns hold the flattened ", "-joined names, not URLs.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id INTEGER PRIMARY KEY,
                birth_year TEXT,
                eye_color TEXT,
                films TEXT,
                gender TEXT,
                hair_color TEXT,
                height TEXT,
                homeworld TEXT,
                mass TEXT,
                name TEXT,
                skin_color TEXT,
                species TEXT,
                starships TEXT,
                vehicles TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Close the pool, waiting for the connection to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<CharacterStore, StoreError> {
    CharacterStore::open("sqlite::memory:", false).await
}
