//! Roster (de)serialization.

use roster_model::Candidate;

use crate::backend::KeyValueStore;
use crate::error::{PersistenceError, Result};

/// Parse a stored roster. Anything that is not a JSON array of candidates
/// yields `None`.
pub fn decode_candidates(raw: &str) -> Option<Vec<Candidate>> {
    serde_json::from_str(raw).ok()
}

/// Serialize the full roster as a compact JSON array.
pub fn encode_candidates(candidates: &[Candidate]) -> Result<String> {
    serde_json::to_string(candidates).map_err(|source| PersistenceError::Serialization { source })
}

/// Load the roster stored under `key`, degrading every failure to an empty
/// roster.
pub fn load_candidates<B: KeyValueStore + ?Sized>(backend: &B, key: &str) -> Vec<Candidate> {
    let raw = match backend.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored roster, starting empty");
            return Vec::new();
        }
        Err(error) => {
            tracing::warn!(key, %error, "could not read stored roster, starting empty");
            return Vec::new();
        }
    };

    match decode_candidates(&raw) {
        Some(candidates) => {
            tracing::debug!(key, count = candidates.len(), "loaded stored roster");
            candidates
        }
        None => {
            tracing::warn!(key, "stored roster is malformed, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_malformed_values_decode_as_none() {
        assert!(decode_candidates("not json").is_none());
        assert!(decode_candidates(r#"{"id":"1"}"#).is_none());
        assert!(decode_candidates(r#"[{"id":"1"}]"#).is_none());
        assert_eq!(decode_candidates("[]"), Some(Vec::new()));
    }

    #[test]
    fn test_load_degrades_to_empty() {
        let backend = MemoryStore::new().with_value("candidates", "null");
        assert!(load_candidates(&backend, "candidates").is_empty());
        assert!(load_candidates(&backend, "absent").is_empty());
    }
}
