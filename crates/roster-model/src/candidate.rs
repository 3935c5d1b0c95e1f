//! Candidate records and their identifiers.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{InvalidArgument, Result};
use crate::experience::{ExperienceLevel, deserialize_lenient};

/// Opaque identifier assigned when a candidate is created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    /// Generate a fresh identifier (random UUID v4, hyphenless).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CandidateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Candidate details as collected by an input surface, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCandidate {
    pub full_name: String,
    pub job_role: String,
    pub linked_in_url: String,
    pub github_url: String,
    pub experience_level: Option<ExperienceLevel>,
    pub tech_stack: Vec<String>,
}

/// A single applicant record.
///
/// Immutable once created: fields are only readable. Serialized with the
/// camelCase keys of the stored roster format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    id: CandidateId,
    full_name: String,
    job_role: String,
    linked_in_url: String,
    github_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    tech_stack: Vec<String>,
}

impl Candidate {
    /// Validate `input` and assign it a freshly generated id.
    pub fn create(input: NewCandidate) -> Result<Self> {
        Self::with_id(CandidateId::generate(), input)
    }

    /// Validate `input` under a caller-chosen id.
    ///
    /// Text fields are trimmed; tech tags are trimmed, blank tags dropped and
    /// duplicates removed keeping the first occurrence.
    pub fn with_id(id: CandidateId, input: NewCandidate) -> Result<Self> {
        let candidate = Self {
            id,
            full_name: input.full_name.trim().to_string(),
            job_role: input.job_role.trim().to_string(),
            linked_in_url: input.linked_in_url.trim().to_string(),
            github_url: input.github_url.trim().to_string(),
            experience_level: input.experience_level,
            tech_stack: dedupe_tags(input.tech_stack),
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("id", self.id.as_str()),
            ("fullName", self.full_name.as_str()),
            ("jobRole", self.job_role.as_str()),
            ("linkedInUrl", self.linked_in_url.as_str()),
            ("githubUrl", self.github_url.as_str()),
        ];
        if let Some((field, _)) = required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(InvalidArgument::MissingField { field });
        }
        if self.experience_level.is_none() {
            return Err(InvalidArgument::MissingField {
                field: "experienceLevel",
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &CandidateId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    pub fn linked_in_url(&self) -> &str {
        &self.linked_in_url
    }

    pub fn github_url(&self) -> &str {
        &self.github_url
    }

    /// `None` only for stored records whose level was empty or unrecognised.
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level
    }

    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tech(&self, tag: &str) -> bool {
        self.tech_stack.iter().any(|t| t == tag)
    }
}

fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}
