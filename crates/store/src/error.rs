//! Store error types.
//!
//! Every failure here is a recoverable outcome of normal user interaction.
//! Nothing in this crate panics or aborts the process.

use question_desk_core::{BrokerId, QuestionId};
use thiserror::Error;

/// A field constraint violated by a create or update attempt.
///
/// The store state is untouched when one of these is returned; callers can
/// surface the message next to the offending form field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `name` was empty or whitespace-only.
    #[error("name cannot be empty")]
    EmptyName,
    /// `broker` is not a member of the fixed broker set.
    #[error("broker {0} is not in the broker set")]
    UnknownBroker(BrokerId),
}

/// Failure of a store operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id exists.
    #[error("question {0} not found")]
    NotFound(QuestionId),
    /// The submitted record violates a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
