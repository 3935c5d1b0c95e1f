//! Persistent storage for the candidate roster.
//!
//! The roster is a single JSON array stored under one key of a key-value
//! backend. Every mutation rewrites the whole array.
//!
//! # Failure policy
//!
//! - Loading never fails: a missing key, an unreadable backend or malformed
//!   data all start an empty roster (logged at `warn` for the latter two).
//! - A failed save is reported to the caller but the in-memory roster keeps
//!   the change and stays authoritative; [`CandidateStore::flush`] retries.
//!
//! # Example
//!
//! ```ignore
//! use roster_model::{Candidate, NewCandidate};
//! use roster_store::{CandidateStore, FileStore};
//!
//! let mut store = CandidateStore::open(FileStore::new("/path/to/data"));
//! store.insert(Candidate::create(new_candidate)?)?;
//! ```
//!
//! # Architecture
//!
//! - `backend/` - `KeyValueStore` trait with memory and file implementations
//! - `codec.rs` - roster (de)serialization with lenient loading
//! - `store.rs` - `CandidateStore`, the append-only roster
//! - `error.rs` - error types with user-facing messages

mod backend;
mod codec;
mod error;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use codec::{decode_candidates, encode_candidates, load_candidates};
pub use error::{PersistenceError, Result, StoreError};
pub use store::{CANDIDATES_KEY, CandidateStore};
