//! Data model for the candidate roster.
//!
//! The types here are shared by the query pipeline, the persistence layer and
//! the CLI. They carry no I/O and no logging.

pub mod candidate;
pub mod criteria;
pub mod error;
pub mod experience;

pub use candidate::{Candidate, CandidateId, NewCandidate};
pub use criteria::{Criteria, PagePolicy, SortKey};
pub use error::{InvalidArgument, Result};
pub use experience::ExperienceLevel;
