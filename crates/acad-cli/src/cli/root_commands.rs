use std::path::PathBuf;

use acad_core::enums::EntityKind;
use clap::{Subcommand, ValueEnum};

/// Payload shapes accepted by `acad check`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Shape {
    QuestionConfig,
    Create,
    MultipleCreate,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deep-validate a JSON payload file
    Check {
        /// Payload shape
        shape: Shape,
        /// Path to the JSON payload
        file: PathBuf,
    },

    /// Resolve an entity by primary key
    Locate {
        /// Entity kind (account, student, teacher, academy, classroom, lesson,
        /// exam, question, attender_state, attender_answer)
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
        /// Primary key
        id: i64,
    },

    /// Resolve the answer an attender state holds for a question
    Answer {
        state_id: i64,
        question_id: i64,
    },
}

fn parse_kind(s: &str) -> Result<EntityKind, String> {
    EntityKind::parse(&s.replace('-', "_")).ok_or_else(|| format!("unknown entity kind '{s}'"))
}
