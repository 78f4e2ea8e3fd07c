//! # acad-db
//!
//! libSQL persistence for the academy backend.
//!
//! Holds the relational rows for every locatable entity, encodes the
//! `Answer` and `MultipleChoice` value objects into text columns through
//! [`codec`], and resolves primary keys into entities through [`locator`].
//! Question writes are gated by the deep validator in `acad-core`.

pub mod codec;
pub mod error;
pub mod helpers;
pub mod locator;
mod migrations;
pub mod repos;
pub mod service;

use acad_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all academy state.
pub struct AcademyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AcademyDb {
    /// Open a local database at the given path with foreign keys enabled.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        tracing::debug!(path = %config.path, "opening academy database");
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;

        if config.foreign_keys {
            // Must be set per connection in SQLite
            conn.execute("PRAGMA foreign_keys = ON", ())
                .await
                .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        }

        let academy_db = Self { db, conn };
        academy_db.run_migrations().await?;
        Ok(academy_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run `sql` with `id` bound to `?1` and map the first row, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or `map` rejects the row.
    pub async fn query_by_id<T>(
        &self,
        sql: &str,
        id: i64,
        map: fn(&libsql::Row) -> Result<T, DatabaseError>,
    ) -> Result<Option<T>, DatabaseError> {
        let mut rows = self.conn.query(sql, libsql::params![id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(map(&row)?)),
            None => Ok(None),
        }
    }

    /// Run `sql` with `id` bound to `?1` and map every row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or `map` rejects a row.
    pub async fn query_all_by_id<T>(
        &self,
        sql: &str,
        id: i64,
        map: fn(&libsql::Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        let mut rows = self.conn.query(sql, libsql::params![id]).await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(map(&row)?);
        }
        Ok(out)
    }
}
