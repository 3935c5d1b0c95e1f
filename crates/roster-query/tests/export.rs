//! Snapshot tests for CSV export.

use roster_model::{Candidate, CandidateId, Criteria, ExperienceLevel, NewCandidate, SortKey};
use roster_query::{
    EXPORT_FILE_NAME, EXPORT_MEDIA_TYPE, ExportFormat, encode, encode_with, filter_and_sort,
};

fn test_candidate(
    id: &str,
    name: &str,
    role: &str,
    level: ExperienceLevel,
    tech: &[&str],
) -> Candidate {
    Candidate::with_id(
        CandidateId::from(id),
        NewCandidate {
            full_name: name.to_string(),
            job_role: role.to_string(),
            linked_in_url: format!("https://linkedin.com/in/{id}"),
            github_url: format!("https://github.com/{id}"),
            experience_level: Some(level),
            tech_stack: tech.iter().map(|t| (*t).to_string()).collect(),
        },
    )
    .unwrap()
}

fn test_roster() -> Vec<Candidate> {
    vec![
        test_candidate(
            "bob",
            "Bob",
            "Frontend Engineer",
            ExperienceLevel::Junior,
            &["React", "Node"],
        ),
        test_candidate(
            "ann",
            "Ann",
            "Backend Engineer",
            ExperienceLevel::Senior,
            &["Rust"],
        ),
        test_candidate("cy", "Cy", "Designer", ExperienceLevel::Mid, &[]),
    ]
}

#[test]
fn test_legacy_export_snapshot() {
    let records = test_roster();
    let mut criteria = Criteria::default();
    criteria.set_role_substring("engineer");
    criteria.set_sort_key(SortKey::Name);
    // Pagination never applies to export.
    criteria.set_page(7);

    let csv = encode(filter_and_sort(&records, &criteria));

    insta::assert_snapshot!(csv, @r#"
    Name,Job Role,Experience Level,LinkedIn,GitHub,Tech Stack
    "Ann","Backend Engineer","senior","https://linkedin.com/in/ann","https://github.com/ann","Rust"
    "Bob","Frontend Engineer","junior","https://linkedin.com/in/bob","https://github.com/bob","React, Node"
    "#);
}

#[test]
fn test_legacy_export_does_not_escape_quotes() {
    let records = vec![test_candidate(
        "q",
        "Jo \"JJ\" Smith",
        "Dev, Ops",
        ExperienceLevel::Mid,
        &[],
    )];

    let csv = encode(&records);

    assert_eq!(
        csv.lines().nth(1),
        Some(r#""Jo "JJ" Smith","Dev, Ops","mid","https://linkedin.com/in/q","https://github.com/q","""#)
    );
}

#[test]
fn test_escaped_export_snapshot() {
    let records = vec![
        test_candidate(
            "q",
            "Jo \"JJ\" Smith",
            "Dev, Ops",
            ExperienceLevel::Mid,
            &["Go", "SQL"],
        ),
        test_candidate("p", "Plain", "Tester", ExperienceLevel::Junior, &[]),
    ];

    let csv = encode_with(&records, ExportFormat::Escaped).unwrap();

    insta::assert_snapshot!(csv, @r#"
    Name,Job Role,Experience Level,LinkedIn,GitHub,Tech Stack
    "Jo ""JJ"" Smith","Dev, Ops",mid,https://linkedin.com/in/q,https://github.com/q,"Go, SQL"
    Plain,Tester,junior,https://linkedin.com/in/p,https://github.com/p,
    "#);
}

#[test]
fn test_export_artifact_metadata() {
    assert_eq!(EXPORT_FILE_NAME, "candidates.csv");
    assert_eq!(EXPORT_MEDIA_TYPE, "text/csv");
}

#[test]
fn test_export_is_deterministic() {
    let records = test_roster();
    assert_eq!(encode(&records), encode(&records));
    assert_eq!(encode(&records).lines().count(), 1 + records.len());
}
