//! Filter, sort and page selection driving the roster view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;
use crate::experience::ExperienceLevel;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by full name.
    #[default]
    Name,
    /// Most senior first.
    Experience,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Experience => "experience",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "experience" => Ok(SortKey::Experience),
            _ => Err(InvalidArgument::SortKey(s.to_string())),
        }
    }
}

/// What happens to the current page when a filter or the sort key changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagePolicy {
    /// Jump back to page 1.
    #[default]
    #[serde(rename = "reset")]
    ResetToFirst,
    /// Keep the current page number, even if the narrowed result is shorter.
    #[serde(rename = "preserve")]
    Preserve,
}

impl PagePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagePolicy::ResetToFirst => "reset",
            PagePolicy::Preserve => "preserve",
        }
    }
}

impl fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PagePolicy {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reset" => Ok(PagePolicy::ResetToFirst),
            "preserve" => Ok(PagePolicy::Preserve),
            _ => Err(InvalidArgument::PagePolicy(s.to_string())),
        }
    }
}

/// Current view selection for one session.
///
/// Never persisted. `page` is 1-based and never below 1; the upper bound is
/// only known once a query has run, so the pipeline clamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    role_substring: String,
    experience_level: Option<ExperienceLevel>,
    tech_tag: Option<String>,
    sort_key: SortKey,
    page: usize,
    policy: PagePolicy,
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new(PagePolicy::default())
    }
}

impl Criteria {
    /// Empty filters, name ordering, first page.
    pub fn new(policy: PagePolicy) -> Self {
        Self {
            role_substring: String::new(),
            experience_level: None,
            tech_tag: None,
            sort_key: SortKey::default(),
            page: 1,
            policy,
        }
    }

    pub fn role_substring(&self) -> &str {
        &self.role_substring
    }

    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level
    }

    pub fn tech_tag(&self) -> Option<&str> {
        self.tech_tag.as_deref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    pub fn set_role_substring(&mut self, role: impl Into<String>) {
        let role = role.into();
        if role != self.role_substring {
            self.role_substring = role;
            self.selection_changed();
        }
    }

    pub fn set_experience_level(&mut self, level: Option<ExperienceLevel>) {
        if level != self.experience_level {
            self.experience_level = level;
            self.selection_changed();
        }
    }

    /// An empty tag clears the tech filter.
    pub fn set_tech_tag(&mut self, tag: Option<&str>) {
        let tag = tag.filter(|t| !t.is_empty()).map(str::to_string);
        if tag != self.tech_tag {
            self.tech_tag = tag;
            self.selection_changed();
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        if sort_key != self.sort_key {
            self.sort_key = sort_key;
            self.selection_changed();
        }
    }

    /// Pages are 1-based; 0 is treated as 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advance one page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = self.page.saturating_add(1).min(total_pages.max(1));
    }

    /// Step back one page, stopping at 1.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Drop every filter, keeping the sort key.
    pub fn clear_filters(&mut self) {
        self.set_role_substring(String::new());
        self.set_experience_level(None);
        self.set_tech_tag(None);
    }

    pub fn has_filters(&self) -> bool {
        !self.role_substring.is_empty()
            || self.experience_level.is_some()
            || self.tech_tag.is_some()
    }

    fn selection_changed(&mut self) {
        if self.policy == PagePolicy::ResetToFirst {
            self.page = 1;
        }
    }
}
