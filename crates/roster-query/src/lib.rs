//! Query pipeline for the candidate roster.
//!
//! Every function in this crate is pure: the same records and criteria always
//! produce the same output, and nothing here touches storage.
//!
//! - **filter**: role / experience / tech predicates
//! - **collation**: locale-style string ordering for names
//! - **sort**: stable name and experience orderings
//! - **paginate**: page count and slice bounds
//! - **pipeline**: `query` and `filter_and_sort`, the entry points
//! - **export**: CSV encoding of the filtered+sorted sequence
//! - **summary**: small derived values for display (count labels, tag lists)

pub mod collation;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod summary;

pub use export::{
    EXPORT_FILE_NAME, EXPORT_HEADERS, EXPORT_MEDIA_TYPE, ExportError, ExportFormat, encode,
    encode_escaped, encode_with,
};
pub use pipeline::{DEFAULT_PAGE_SIZE, QueryResult, filter_and_sort, query};
pub use summary::{count_label, distinct_tech_tags};
