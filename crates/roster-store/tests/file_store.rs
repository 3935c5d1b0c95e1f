//! Integration tests for the file-backed roster.

use std::fs;

use roster_model::{Candidate, ExperienceLevel, NewCandidate};
use roster_store::{CANDIDATES_KEY, CandidateStore, FileStore, KeyValueStore, StoreError};
use tempfile::tempdir;

fn test_candidate(name: &str, tech: &[&str]) -> Candidate {
    Candidate::create(NewCandidate {
        full_name: name.to_string(),
        job_role: "Platform Engineer".to_string(),
        linked_in_url: format!("https://linkedin.com/in/{}", name.to_lowercase()),
        github_url: format!("https://github.com/{}", name.to_lowercase()),
        experience_level: Some(ExperienceLevel::Senior),
        tech_stack: tech.iter().map(|t| (*t).to_string()).collect(),
    })
    .unwrap()
}

#[test]
fn test_roster_survives_reopen() {
    let dir = tempdir().unwrap();

    let mut store = CandidateStore::open(FileStore::new(dir.path()));
    assert!(store.is_empty());
    store.insert(test_candidate("Ann", &["Rust", "Go"])).unwrap();
    store.insert(test_candidate("Bob", &[])).unwrap();
    let first_id = store.all()[0].id().clone();
    drop(store);

    let reopened = CandidateStore::open(FileStore::new(dir.path()));
    assert_eq!(reopened.len(), 2);
    let ann = reopened.get(&first_id).expect("Ann persisted");
    assert_eq!(ann.tech_stack(), ["Rust", "Go"]);
}

#[test]
fn test_stored_file_is_a_json_array() {
    let dir = tempdir().unwrap();
    let mut store = CandidateStore::open(FileStore::new(dir.path()));
    store.insert(test_candidate("Ann", &["Rust"])).unwrap();

    let raw = fs::read_to_string(dir.path().join("candidates.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["fullName"], "Ann");
    assert_eq!(array[0]["experienceLevel"], "senior");
}

#[test]
fn test_corrupt_file_opens_empty_and_is_replaced_on_insert() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("candidates.json"), b"{ this is not json").unwrap();

    let mut store = CandidateStore::open(FileStore::new(dir.path()));
    assert!(store.is_empty());

    store.insert(test_candidate("Cy", &[])).unwrap();
    let backend = FileStore::new(dir.path());
    let raw = backend.load(CANDIDATES_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn test_unwritable_location_keeps_candidate_for_session() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, b"a file where the data directory should be").unwrap();

    let mut store = CandidateStore::open(FileStore::new(&blocker));
    let result = store.insert(test_candidate("Dee", &[]));

    let error = match result {
        Err(StoreError::Persistence(error)) => error,
        other => panic!("expected a persistence failure, got {other:?}"),
    };
    assert!(error.suggestion().is_some());
    assert!(!error.user_message().is_empty());
    assert_eq!(store.len(), 1);
    assert!(store.has_unsaved_changes());
    assert!(store.flush().is_err());
}
