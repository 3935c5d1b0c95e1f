//! Orderings over filtered records.
//!
//! Both orderings use the standard library's stable sort, so records with
//! equal keys keep their filtered relative order.

use std::cmp::Reverse;

use roster_model::{Candidate, ExperienceLevel, SortKey};

use crate::collation::locale_compare;

/// Sort `records` in place by `key`.
pub fn sort_candidates(records: &mut [&Candidate], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by(|a, b| locale_compare(a.full_name(), b.full_name())),
        SortKey::Experience => {
            records.sort_by_key(|c| Reverse(ExperienceLevel::rank_of(c.experience_level())));
        }
    }
}
