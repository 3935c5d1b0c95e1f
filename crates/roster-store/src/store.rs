//! The append-only candidate roster.

use roster_model::{Candidate, CandidateId, InvalidArgument};

use crate::backend::KeyValueStore;
use crate::codec::{encode_candidates, load_candidates};
use crate::error::{PersistenceError, StoreError};

/// Backend key under which the roster is stored.
pub const CANDIDATES_KEY: &str = "candidates";

/// Authoritative, insertion-ordered candidate sequence.
///
/// Every successful [`insert`](Self::insert) is followed by a full save to
/// the backend. Only one writer is expected.
#[derive(Debug)]
pub struct CandidateStore<B> {
    backend: B,
    key: String,
    candidates: Vec<Candidate>,
    /// Set when the in-memory roster is ahead of the backend.
    unsaved: bool,
}

impl<B: KeyValueStore> CandidateStore<B> {
    /// Open the roster stored under [`CANDIDATES_KEY`]. Never fails.
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, CANDIDATES_KEY)
    }

    /// Open the roster stored under `key`. Never fails.
    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let candidates = load_candidates(&backend, &key);
        Self {
            backend,
            key,
            candidates,
            unsaved: false,
        }
    }

    /// Current snapshot in insertion order.
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id() == id)
    }

    /// Append `candidate` and persist the whole roster.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidArgument`] if a required field is missing or the
    ///   id is already taken. Nothing is changed.
    /// - [`StoreError::Persistence`] if the save failed. The candidate **is**
    ///   kept in memory; [`has_unsaved_changes`](Self::has_unsaved_changes)
    ///   reports true until a later save succeeds.
    pub fn insert(&mut self, candidate: Candidate) -> Result<(), StoreError> {
        candidate.validate()?;
        if self.get(candidate.id()).is_some() {
            return Err(InvalidArgument::DuplicateId(candidate.id().to_string()).into());
        }

        let id = candidate.id().clone();
        self.candidates.push(candidate);
        self.unsaved = true;
        tracing::info!(%id, total = self.candidates.len(), "candidate added");

        self.flush().map_err(|error| {
            tracing::warn!(%id, %error, "candidate kept in memory but not saved");
            StoreError::Persistence(error)
        })
    }

    /// Whether the backend is behind the in-memory roster.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Write the whole roster to the backend.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        let payload = encode_candidates(&self.candidates)?;
        self.backend.save(&self.key, &payload)?;
        self.unsaved = false;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
