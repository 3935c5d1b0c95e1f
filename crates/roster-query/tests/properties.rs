//! Property tests for the query pipeline and export.

use std::collections::HashMap;

use proptest::prelude::*;
use roster_model::{Candidate, CandidateId, Criteria, ExperienceLevel, NewCandidate, SortKey};
use roster_query::collation::locale_compare;
use roster_query::filter::filter;
use roster_query::{encode, filter_and_sort, query};

const NAMES: [&str; 7] = ["Ann", "ann", "Bob", "Émile", "Elena", "Zoë", "carl"];
const ROLES: [&str; 4] = [
    "Backend Engineer",
    "Frontend Engineer",
    "Data Scientist",
    "engineering manager",
];
const TAGS: [&str; 5] = ["React", "Node", "Vue", "Rust", "react"];

type Fields = (&'static str, &'static str, ExperienceLevel, Vec<&'static str>);

fn candidate_fields() -> impl Strategy<Value = Fields> {
    (
        prop::sample::select(NAMES.to_vec()),
        prop::sample::select(ROLES.to_vec()),
        prop::sample::select(ExperienceLevel::ALL.to_vec()),
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..4),
    )
}

fn roster() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_fields(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, role, level, tech))| {
                Candidate::with_id(
                    CandidateId::from(index.to_string()),
                    NewCandidate {
                        full_name: name.to_string(),
                        job_role: role.to_string(),
                        linked_in_url: "https://linkedin.com/in/p".to_string(),
                        github_url: "https://github.com/p".to_string(),
                        experience_level: Some(level),
                        tech_stack: tech.into_iter().map(str::to_string).collect(),
                    },
                )
                .unwrap()
            })
            .collect()
    })
}

fn criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::sample::select(vec!["", "eng", "ENGINEER", "data", "x"]),
        prop::option::of(prop::sample::select(ExperienceLevel::ALL.to_vec())),
        prop::option::of(prop::sample::select(TAGS.to_vec())),
        prop::sample::select(vec![SortKey::Name, SortKey::Experience]),
        0usize..6,
    )
        .prop_map(|(role, level, tag, sort_key, page)| {
            let mut criteria = Criteria::default();
            criteria.set_role_substring(role);
            criteria.set_experience_level(level);
            criteria.set_tech_tag(tag);
            criteria.set_sort_key(sort_key);
            criteria.set_page(page);
            criteria
        })
}

fn satisfies(candidate: &Candidate, criteria: &Criteria) -> bool {
    let role_ok = candidate
        .job_role()
        .to_lowercase()
        .contains(&criteria.role_substring().to_lowercase());
    let level_ok = match criteria.experience_level() {
        Some(level) => candidate.experience_level() == Some(level),
        None => true,
    };
    let tech_ok = match criteria.tech_tag() {
        Some(tag) => candidate.tech_stack().iter().any(|t| t == tag),
        None => true,
    };
    role_ok && level_ok && tech_ok
}

fn ids(records: &[&Candidate]) -> Vec<String> {
    records.iter().map(|c| c.id().to_string()).collect()
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_satisfying_records(records in roster(), criteria in criteria()) {
        let expected: Vec<String> = records
            .iter()
            .filter(|c| satisfies(c, &criteria))
            .map(|c| c.id().to_string())
            .collect();
        prop_assert_eq!(ids(&filter(&records, &criteria)), expected);
    }

    #[test]
    fn sort_is_ordered_and_stable(records in roster(), criteria in criteria()) {
        let filtered = filter(&records, &criteria);
        let position: HashMap<String, usize> = filtered
            .iter()
            .enumerate()
            .map(|(index, c)| (c.id().to_string(), index))
            .collect();
        let sorted = filter_and_sort(&records, &criteria);
        prop_assert_eq!(sorted.len(), filtered.len());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ordering = match criteria.sort_key() {
                SortKey::Name => locale_compare(a.full_name(), b.full_name()),
                SortKey::Experience => ExperienceLevel::rank_of(b.experience_level())
                    .cmp(&ExperienceLevel::rank_of(a.experience_level())),
            };
            prop_assert_ne!(ordering, std::cmp::Ordering::Greater);
            if ordering == std::cmp::Ordering::Equal {
                prop_assert!(position[a.id().as_str()] < position[b.id().as_str()]);
            }
        }
    }

    #[test]
    fn pages_cover_the_sorted_sequence(
        records in roster(),
        criteria in criteria(),
        page_size in 1usize..12,
    ) {
        let expected = ids(&filter_and_sort(&records, &criteria));
        let total_pages = query(&records, &criteria, page_size).unwrap().total_pages;

        let mut stepped = criteria.clone();
        let mut seen = Vec::new();
        for page in 1..=total_pages {
            stepped.set_page(page);
            let result = query(&records, &stepped, page_size).unwrap();
            prop_assert_eq!(result.page_number, page);
            prop_assert!(result.page.len() <= page_size);
            seen.extend(ids(&result.page));
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn query_is_idempotent(records in roster(), criteria in criteria(), page_size in 1usize..12) {
        let first = query(&records, &criteria, page_size).unwrap();
        let second = query(&records, &criteria, page_size).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn export_has_one_row_per_record(records in roster(), criteria in criteria()) {
        let sorted = filter_and_sort(&records, &criteria);
        let csv = encode(sorted.iter().copied());
        prop_assert_eq!(csv.split('\n').count(), 1 + sorted.len());
        prop_assert_eq!(csv.clone(), encode(sorted.iter().copied()));
    }
}
