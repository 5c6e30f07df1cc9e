//! The question store.

use std::sync::atomic::{AtomicI32, Ordering};

use question_desk_core::QuestionId;
use tokio::sync::watch;
use tracing::debug;

use crate::error::StoreError;
use crate::question::{Question, QuestionDraft, QuestionPatch};
use crate::seed;

/// The canonical in-memory list of [`Question`] records.
///
/// The list lives inside a [`watch`] channel: the channel value *is* the
/// current record list, so every committed mutation publishes the complete
/// snapshot and subscribers always observe the latest full list, never a
/// diff. Reads hand out clones; consumers cannot mutate records in place.
///
/// All operations are synchronous and run to completion before returning.
/// Overlapping callers are serialized by the channel, so no further locking
/// is needed.
///
/// Ids are allocated from a monotonically increasing counter that starts
/// past the seeded range and only ever moves forward, so an id freed by a
/// deletion is never issued again within a session.
pub struct QuestionStore {
    snapshot: watch::Sender<Vec<Question>>,
    next_id: AtomicI32,
}

impl QuestionStore {
    /// Create an empty store. The first added record gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a store seeded with `count` synthetic records, ids `1..=count`.
    ///
    /// The seeded list is the notification stream's initial value, so
    /// subscribers see it without waiting for a mutation.
    #[must_use]
    pub fn seeded(count: u32) -> Self {
        let store = Self::from_records(seed::synthetic_questions(count));
        debug!(count, "question store seeded");
        store
    }

    fn from_records(records: Vec<Question>) -> Self {
        let max_id = records.iter().map(|q| q.id.as_i32()).max().unwrap_or(0);
        Self {
            snapshot: watch::Sender::new(records),
            next_id: AtomicI32::new(max_id + 1),
        }
    }

    /// The current record list, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Question> {
        self.snapshot.borrow().clone()
    }

    /// Number of records currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this id. Absence
    /// is an expected outcome (a detail view renders it), never a panic.
    pub fn get(&self, id: QuestionId) -> Result<Question, StoreError> {
        self.snapshot
            .borrow()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Validate and append a new record, assigning it the next id.
    ///
    /// Publishes the updated snapshot and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for an empty name or a broker
    /// outside the fixed set. Nothing is stored or emitted in that case.
    pub fn add(&self, draft: QuestionDraft) -> Result<Question, StoreError> {
        draft.validate()?;

        let id = QuestionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let created = draft.into_question(id);
        let result = created.clone();
        self.snapshot.send_modify(|records| records.push(created));

        debug!(%id, "question added");
        Ok(result)
    }

    /// Apply a partial update to the record with the given id.
    ///
    /// Only the fields present in the patch change; `id` never does.
    /// Publishes the updated snapshot and returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if a supplied field violates its
    /// constraint, or [`StoreError::NotFound`] if the id does not exist.
    /// The store is untouched and nothing is emitted on failure.
    pub fn update(&self, id: QuestionId, patch: QuestionPatch) -> Result<Question, StoreError> {
        patch.validate()?;

        let mut updated = None;
        self.snapshot.send_if_modified(|records| {
            let Some(record) = records.iter_mut().find(|q| q.id == id) else {
                return false;
            };
            patch.apply(record);
            updated = Some(record.clone());
            true
        });

        match updated {
            Some(record) => {
                debug!(%id, "question updated");
                Ok(record)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Remove the record with the given id, if present.
    ///
    /// Deleting an absent record is an idempotent no-op, not an error. The
    /// current snapshot is re-published either way. Returns whether a
    /// record was actually removed.
    pub fn remove(&self, id: QuestionId) -> bool {
        let mut removed = false;
        self.snapshot.send_modify(|records| {
            let before = records.len();
            records.retain(|q| q.id != id);
            removed = records.len() != before;
        });

        if removed {
            debug!(%id, "question removed");
        } else {
            debug!(%id, "remove of absent question ignored");
        }
        removed
    }

    /// Records whose display fields contain `needle`, case-insensitively.
    ///
    /// Display-side convenience over [`Question::matches`]; an empty
    /// needle returns the full list. Never mutates the store.
    #[must_use]
    pub fn filter(&self, needle: &str) -> Vec<Question> {
        self.snapshot
            .borrow()
            .iter()
            .filter(|q| q.matches(needle))
            .cloned()
            .collect()
    }

    /// Subscribe to the change-notification stream.
    ///
    /// The receiver's current value is the latest snapshot; every committed
    /// mutation (and every `remove`, even a no-op) publishes a new one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Question>> {
        self.snapshot.subscribe()
    }
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new()
    }
}
