//! # acad-core
//!
//! Core types and error classification for the academy backend.
//!
//! This crate provides the foundational types shared across all academy crates:
//! - Entity structs for every row the locator resolves (accounts, exams, questions, ...)
//! - `Answer` and `MultipleChoice` value objects stored as text columns
//! - Inbound question payload shapes and their deep validator
//! - The `EntityKind` closed set used for table mapping and not-found reasons
//! - Categorized error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;
pub mod validate;
pub mod values;
