use thiserror::Error;

/// A caller handed the roster something it cannot accept.
///
/// Returned before any state is touched; retrying with the same input fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("page size must be greater than zero")]
    PageSize,
    #[error("candidate id `{0}` is already in use")]
    DuplicateId(String),
    #[error("unknown experience level `{0}` (expected junior, mid or senior)")]
    ExperienceLevel(String),
    #[error("unknown sort key `{0}` (expected name or experience)")]
    SortKey(String),
    #[error("unknown page policy `{0}` (expected reset or preserve)")]
    PagePolicy(String),
    #[error("unknown export format `{0}` (expected legacy or escaped)")]
    ExportFormat(String),
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
