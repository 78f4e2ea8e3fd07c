//! Account, student, and teacher rows.

use acad_core::entities::{Account, Student, Teacher};
use acad_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::locator::Locate;

impl Locate for Account {
    const KIND: EntityKind = EntityKind::Account;
    const COLUMNS: &'static str = "id, email, name, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            email: row.get::<String>(1)?,
            name: row.get::<String>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}

impl Locate for Student {
    const KIND: EntityKind = EntityKind::Student;
    const COLUMNS: &'static str = "id, account_id, academy_id, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            account_id: row.get::<i64>(1)?,
            academy_id: row.get::<Option<i64>>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}

impl Locate for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;
    const COLUMNS: &'static str = "id, account_id, academy_id, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            account_id: row.get::<i64>(1)?,
            academy_id: row.get::<i64>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}
