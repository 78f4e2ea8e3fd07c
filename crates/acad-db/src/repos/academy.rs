//! Academy, classroom, and lesson rows.

use acad_core::entities::{Academy, Classroom, Lesson};
use acad_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::locator::Locate;

impl Locate for Academy {
    const KIND: EntityKind = EntityKind::Academy;
    const COLUMNS: &'static str = "id, name, description, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            description: get_opt_string(row, 2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}

impl Locate for Classroom {
    const KIND: EntityKind = EntityKind::Classroom;
    const COLUMNS: &'static str = "id, academy_id, name, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            academy_id: row.get::<i64>(1)?,
            name: row.get::<String>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}

impl Locate for Lesson {
    const KIND: EntityKind = EntityKind::Lesson;
    const COLUMNS: &'static str = "id, classroom_id, title, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            classroom_id: row.get::<i64>(1)?,
            title: row.get::<String>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}
