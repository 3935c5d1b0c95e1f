//! Subcommand implementations.
//!
//! Each command takes an open store and returns what should be printed, so
//! the binary only decides where output goes and which exit code to use.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use roster_model::{Candidate, CandidateId, Criteria, NewCandidate, PagePolicy};
use roster_query::{distinct_tech_tags, encode_with, filter_and_sort, query};
use roster_store::{CandidateStore, KeyValueStore, StoreError};

use crate::cli::{AddArgs, ExportArgs, FilterArgs, ListArgs};
use crate::logging::redact_value;
use crate::render::{render_candidate, render_page, render_tags};
use crate::settings::Settings;

/// Result of `add`.
#[derive(Debug)]
pub struct AddOutcome {
    pub id: CandidateId,
    /// Set when the candidate was added for this run but could not be saved.
    pub warning: Option<String>,
}

/// Result of `export`.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// No candidate matched, nothing was written.
    Skipped,
}

/// Build criteria from filter flags. The page stays at 1.
pub fn criteria_from_filters(filters: &FilterArgs, policy: PagePolicy) -> Criteria {
    let mut criteria = Criteria::new(policy);
    if let Some(role) = &filters.role {
        criteria.set_role_substring(role.as_str());
    }
    criteria.set_experience_level(filters.experience.map(Into::into));
    criteria.set_tech_tag(filters.tech.as_deref());
    criteria.set_sort_key(filters.sort.into());
    criteria
}

pub fn run_add<B: KeyValueStore>(
    store: &mut CandidateStore<B>,
    args: &AddArgs,
) -> Result<AddOutcome> {
    let candidate = Candidate::create(NewCandidate {
        full_name: args.name.clone(),
        job_role: args.role.clone(),
        linked_in_url: args.linkedin.clone(),
        github_url: args.github.clone(),
        experience_level: Some(args.experience.into()),
        tech_stack: args.tech.clone(),
    })
    .context("invalid candidate")?;
    let id = candidate.id().clone();
    tracing::debug!(%id, name = redact_value(candidate.full_name()), "adding candidate");

    match store.insert(candidate) {
        Ok(()) => Ok(AddOutcome { id, warning: None }),
        Err(StoreError::Persistence(error)) => {
            let mut warning = error.user_message();
            if let Some(suggestion) = error.suggestion() {
                warning.push_str(&format!(" {suggestion}"));
            }
            Ok(AddOutcome {
                id,
                warning: Some(warning),
            })
        }
        Err(error) => Err(error).context("could not add candidate"),
    }
}

pub fn run_list<B: KeyValueStore>(
    store: &CandidateStore<B>,
    args: &ListArgs,
    settings: &Settings,
) -> Result<String> {
    let mut criteria = criteria_from_filters(&args.filters, settings.page_policy);
    criteria.set_page(args.page);
    let page_size = args.page_size.unwrap_or(settings.page_size);

    let result = query(store.all(), &criteria, page_size).context("invalid page size")?;
    tracing::debug!(
        total = result.total_count,
        page = result.page_number,
        pages = result.total_pages,
        "listed candidates"
    );
    Ok(render_page(&result, &criteria))
}

pub fn run_show<B: KeyValueStore>(store: &CandidateStore<B>, id: &str) -> Result<String> {
    let id = CandidateId::from(id.trim());
    match store.get(&id) {
        Some(candidate) => Ok(render_candidate(candidate)),
        None => bail!("no candidate with id `{id}`"),
    }
}

pub fn run_export<B: KeyValueStore>(
    store: &CandidateStore<B>,
    args: &ExportArgs,
    settings: &Settings,
) -> Result<ExportOutcome> {
    let criteria = criteria_from_filters(&args.filters, settings.page_policy);
    let view = filter_and_sort(store.all(), &criteria);
    if view.is_empty() {
        tracing::warn!("no candidates match, export skipped");
        return Ok(ExportOutcome::Skipped);
    }

    let format = args.format.map_or(settings.export.format, Into::into);
    let content = encode_with(view.iter().copied(), format).context("failed to encode CSV")?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.export.file_name));
    write_export(&path, &content)?;

    tracing::info!(path = %path.display(), rows = view.len(), %format, "exported candidates");
    Ok(ExportOutcome::Written {
        path,
        rows: view.len(),
    })
}

fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

pub fn run_tags<B: KeyValueStore>(store: &CandidateStore<B>) -> String {
    render_tags(&distinct_tech_tags(store.all()))
}

/// Print the effective settings. With `init`, also write them to
/// `config_path` unless a file is already there.
pub fn run_config(
    settings: &Settings,
    config_path: &Path,
    data_dir: &Path,
    init: bool,
) -> Result<String> {
    let mut out = String::new();
    if init {
        if config_path.exists() {
            out.push_str(&format!(
                "Settings file already exists: {}\n",
                config_path.display()
            ));
        } else {
            settings.save_to(config_path)?;
            out.push_str(&format!("Wrote {}\n", config_path.display()));
        }
    }
    out.push_str(&format!("# settings file: {}\n", config_path.display()));
    out.push_str(&format!("# data directory: {}\n", data_dir.display()));
    out.push_str(&toml::to_string_pretty(settings).context("failed to serialize settings")?);
    Ok(out)
}
