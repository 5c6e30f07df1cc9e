//! Question Desk Store - the in-memory question store.
//!
//! This crate owns the canonical list of [`Question`] records and everything
//! that touches it:
//!
//! - CRUD operations with recoverable, typed failures ([`StoreError`])
//! - A change-notification stream that publishes the complete record list
//!   after every mutation (subscribers always see the latest snapshot,
//!   never a diff)
//! - The synthetic data generator that seeds the store at startup
//!
//! All operations are synchronous and complete before returning; consumers
//! never mutate records directly, so the notification stream stays
//! consistent with what readers observe.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod question;
mod seed;
mod store;

pub use error::{StoreError, ValidationError};
pub use question::{Question, QuestionDraft, QuestionPatch};
pub use store::QuestionStore;
