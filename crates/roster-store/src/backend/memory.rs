use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// In-process backend. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value, e.g. to simulate previously stored data.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites_value() {
        let mut store = MemoryStore::new().with_value("candidates", "[]");
        store.save("candidates", "[1]").unwrap();
        assert_eq!(store.load("candidates").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.load("missing").unwrap(), None);
    }
}
