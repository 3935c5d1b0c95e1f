//! CLI argument definitions for the roster.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{ExperienceLevel, SortKey};
use roster_query::ExportFormat;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Candidate roster - track, filter and export job candidates",
    long_about = "Keep a persisted roster of job candidates.\n\n\
                  Filter by role, experience level and tech stack, page through\n\
                  the results, and export the filtered list to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow candidate names and links to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored roster (overrides ROSTER_DATA_DIR and settings).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a candidate to the roster.
    Add(AddArgs),

    /// Show one page of the filtered, sorted roster.
    List(ListArgs),

    /// Show every field of one candidate.
    Show(ShowArgs),

    /// Export the filtered, sorted roster (all pages) to CSV.
    Export(ExportArgs),

    /// List the tech tags present in the roster.
    Tags,

    /// Print the effective settings.
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Full name.
    #[arg(long = "name")]
    pub name: String,

    /// Job role or position.
    #[arg(long = "role")]
    pub role: String,

    /// LinkedIn profile URL.
    #[arg(long = "linkedin", value_name = "URL")]
    pub linkedin: String,

    /// GitHub profile URL.
    #[arg(long = "github", value_name = "URL")]
    pub github: String,

    /// Experience level.
    #[arg(long = "experience", value_enum)]
    pub experience: ExperienceArg,

    /// Tech stack tag (repeatable).
    #[arg(long = "tech", value_name = "TAG")]
    pub tech: Vec<String>,
}

/// Filter and sort flags shared by `list` and `export`.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Keep candidates whose role contains this text (case-insensitive).
    #[arg(long = "role")]
    pub role: Option<String>,

    /// Keep candidates at this experience level.
    #[arg(long = "experience", value_enum)]
    pub experience: Option<ExperienceArg>,

    /// Keep candidates with this exact tech tag.
    #[arg(long = "tech", value_name = "TAG")]
    pub tech: Option<String>,

    /// Sort order.
    #[arg(long = "sort", value_enum, default_value = "name")]
    pub sort: SortArg,
}

#[derive(Args, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page to show (1-based; out-of-range pages are clamped).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Candidates per page (default from settings).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Candidate id as printed by `list`.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args, Default)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output file (default: the configured export file name in the current directory).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// CSV flavour (default from settings).
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective settings to the settings file if it does not exist.
    #[arg(long = "init")]
    pub init: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExperienceArg {
    Junior,
    Mid,
    Senior,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(value: ExperienceArg) -> Self {
        match value {
            ExperienceArg::Junior => ExperienceLevel::Junior,
            ExperienceArg::Mid => ExperienceLevel::Mid,
            ExperienceArg::Senior => ExperienceLevel::Senior,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Name,
    Experience,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Name => SortKey::Name,
            SortArg::Experience => SortKey::Experience,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    /// Every field quoted, no escaping (compatible with earlier exports).
    Legacy,
    /// RFC 4180 quoting and escaping.
    Escaped,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Legacy => ExportFormat::Legacy,
            ExportFormatArg::Escaped => ExportFormat::Escaped,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
