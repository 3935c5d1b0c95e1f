//! Candidate experience tiers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;

/// Seniority tier of a candidate.
///
/// Serialized in lowercase (`"junior"`, `"mid"`, `"senior"`), matching the
/// stored roster format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [Self::Junior, Self::Mid, Self::Senior];

    /// Returns the stored token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }

    /// Ordering weight used by the experience sort; higher is more senior.
    pub fn rank(&self) -> u8 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
        }
    }

    /// Rank of an optional level. Records without a recognised level rank 0.
    pub fn rank_of(level: Option<ExperienceLevel>) -> u8 {
        level.map_or(0, |level| level.rank())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = InvalidArgument;

    /// Case-insensitive; accepts the display label `Mid-Level` as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" | "mid-level" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            _ => Err(InvalidArgument::ExperienceLevel(s.to_string())),
        }
    }
}

/// Deserialize an optional level, mapping empty or unknown tokens to `None`.
///
/// Stored rosters may hold `""` for a level that was never chosen; one such
/// record must not make the whole collection unreadable.
pub(crate) fn deserialize_lenient<'de, D>(
    deserializer: D,
) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}
