//! Filter predicates.
//!
//! A record passes only when all three predicates hold. An unset criterion
//! always holds.

use roster_model::{Candidate, Criteria};

/// Keep the records matching `criteria`, in their original order.
pub fn filter<'a>(records: &'a [Candidate], criteria: &Criteria) -> Vec<&'a Candidate> {
    let role = criteria.role_substring().to_lowercase();
    records
        .iter()
        .filter(|candidate| {
            role_matches(candidate, &role)
                && experience_matches(candidate, criteria)
                && tech_matches(candidate, criteria)
        })
        .collect()
}

/// `folded_role` must already be lowercased.
fn role_matches(candidate: &Candidate, folded_role: &str) -> bool {
    folded_role.is_empty() || candidate.job_role().to_lowercase().contains(folded_role)
}

fn experience_matches(candidate: &Candidate, criteria: &Criteria) -> bool {
    criteria
        .experience_level()
        .is_none_or(|level| candidate.experience_level() == Some(level))
}

fn tech_matches(candidate: &Candidate, criteria: &Criteria) -> bool {
    criteria.tech_tag().is_none_or(|tag| candidate.has_tech(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{CandidateId, ExperienceLevel, NewCandidate};

    fn candidate(id: &str, role: &str, level: ExperienceLevel, tech: &[&str]) -> Candidate {
        Candidate::with_id(
            CandidateId::from(id),
            NewCandidate {
                full_name: format!("Candidate {id}"),
                job_role: role.to_string(),
                linked_in_url: "https://linkedin.com/in/x".to_string(),
                github_url: "https://github.com/x".to_string(),
                experience_level: Some(level),
                tech_stack: tech.iter().map(|t| (*t).to_string()).collect(),
            },
        )
        .unwrap()
    }

    #[test]
    fn role_filter_is_case_insensitive_substring() {
        let records = vec![
            candidate("1", "Senior Frontend Engineer", ExperienceLevel::Senior, &[]),
            candidate("2", "Data Scientist", ExperienceLevel::Mid, &[]),
        ];
        let mut criteria = Criteria::default();
        criteria.set_role_substring("END eng");
        let ids: Vec<_> = filter(&records, &criteria)
            .iter()
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn tech_filter_is_exact_match() {
        let records = vec![
            candidate("1", "Dev", ExperienceLevel::Junior, &["React", "Node"]),
            candidate("2", "Dev", ExperienceLevel::Junior, &["Vue"]),
            candidate("3", "Dev", ExperienceLevel::Junior, &["react"]),
        ];
        let mut criteria = Criteria::default();
        criteria.set_tech_tag(Some("React"));
        let ids: Vec<_> = filter(&records, &criteria)
            .iter()
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn all_predicates_must_hold() {
        let records = vec![
            candidate("1", "Backend", ExperienceLevel::Senior, &["Rust"]),
            candidate("2", "Backend", ExperienceLevel::Mid, &["Rust"]),
            candidate("3", "Frontend", ExperienceLevel::Senior, &["Rust"]),
        ];
        let mut criteria = Criteria::default();
        criteria.set_role_substring("back");
        criteria.set_experience_level(Some(ExperienceLevel::Senior));
        criteria.set_tech_tag(Some("Rust"));
        let kept = filter(&records, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id(), records[0].id());
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let records = vec![
            candidate("b", "X", ExperienceLevel::Mid, &[]),
            candidate("a", "Y", ExperienceLevel::Junior, &[]),
        ];
        let kept = filter(&records, &Criteria::default());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id().as_str(), "b");
    }
}
