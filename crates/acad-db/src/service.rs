//! Service layer hosting the locator and the question/answer repositories.
//!
//! `AcademyService` wraps `AcademyDb` (raw database access). The locator and
//! every repo method are implemented as `impl AcademyService` blocks, and all
//! of them return `AcademyError` so callers see one categorized failure type.

use acad_config::DatabaseConfig;

use crate::AcademyDb;
use crate::error::DatabaseError;

pub struct AcademyService {
    db: AcademyDb,
}

impl AcademyService {
    /// Create a new service over a local database (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: AcademyDb::open_local(db_path).await?,
        })
    }

    /// Create a service from the `[database]` config section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: AcademyDb::open(config).await?,
        })
    }

    /// Create from an existing `AcademyDb`.
    #[must_use]
    pub const fn from_db(db: AcademyDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AcademyDb {
        &self.db
    }
}
