//! Entity structs for every row the locator resolves.
//!
//! Each entity maps to one table in the libSQL database and is identified by a
//! numeric primary key. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema checks.

mod academy;
mod account;
mod attender;
mod exam;

pub use academy::{Academy, Classroom, Lesson};
pub use account::{Account, Student, Teacher};
pub use attender::{AttenderAnswer, AttenderState};
pub use exam::{Exam, Question};
