//! Repository modules for every locatable entity.
//!
//! Each module implements `Locate` for its entities and, where the entity
//! carries codec-managed columns, adds write methods to `AcademyService`.

pub mod academy;
pub mod account;
pub mod attender;
pub mod exam;
