//! Derived display values.

use std::collections::BTreeSet;

use roster_model::Candidate;

/// "1 Candidate Found" / "N Candidates Found".
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "Candidate" } else { "Candidates" };
    format!("{count} {noun} Found")
}

/// Every tech tag present in `records`, in first-seen order.
pub fn distinct_tech_tags(records: &[Candidate]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .flat_map(|candidate| candidate.tech_stack().iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .collect()
}
