//! CSV export of the filtered+sorted roster.
//!
//! Two encodings share the same header and row order:
//!
//! - [`ExportFormat::Legacy`] wraps every data field in double quotes and does
//!   no escaping, byte-for-byte compatible with files produced by earlier
//!   versions of the roster. A name containing `"` or a newline produces a
//!   malformed row; that is a known limitation kept for compatibility.
//! - [`ExportFormat::Escaped`] is RFC 4180 output written with the `csv` crate.
//!
//! Neither encoding ends with a trailing newline.

use std::fmt;
use std::str::FromStr;

use roster_model::{Candidate, InvalidArgument};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Download name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "candidates.csv";

/// Media type of the exported artifact.
pub const EXPORT_MEDIA_TYPE: &str = "text/csv";

/// Fixed column order of the export.
pub const EXPORT_HEADERS: [&str; 6] = [
    "Name",
    "Job Role",
    "Experience Level",
    "LinkedIn",
    "GitHub",
    "Tech Stack",
];

const TECH_SEPARATOR: &str = ", ";

/// Export encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Legacy,
    Escaped,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Legacy => "legacy",
            ExportFormat::Escaped => "escaped",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(ExportFormat::Legacy),
            "escaped" | "rfc4180" => Ok(ExportFormat::Escaped),
            _ => Err(InvalidArgument::ExportFormat(s.to_string())),
        }
    }
}

/// Export encoding failure. Only the escaped encoding can fail.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv record")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode `records` in the legacy format.
pub fn encode<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut lines = vec![EXPORT_HEADERS.join(",")];
    lines.extend(records.into_iter().map(|candidate| {
        row_fields(candidate)
            .iter()
            .map(|field| format!("\"{field}\""))
            .collect::<Vec<_>>()
            .join(",")
    }));
    debug!(rows = lines.len() - 1, "encoded legacy csv export");
    lines.join("\n")
}

/// Encode `records` as RFC 4180 CSV.
pub fn encode_escaped<'a, I>(records: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    let mut rows = 0usize;
    for candidate in records {
        writer.write_record(row_fields(candidate))?;
        rows += 1;
    }
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    let mut output = String::from_utf8(bytes)?;
    if output.ends_with('\n') {
        output.pop();
    }
    debug!(rows, "encoded escaped csv export");
    Ok(output)
}

/// Encode `records` in the requested format.
pub fn encode_with<'a, I>(records: I, format: ExportFormat) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    match format {
        ExportFormat::Legacy => Ok(encode(records)),
        ExportFormat::Escaped => encode_escaped(records),
    }
}

fn row_fields(candidate: &Candidate) -> [String; 6] {
    [
        candidate.full_name().to_string(),
        candidate.job_role().to_string(),
        candidate
            .experience_level()
            .map_or("", |level| level.as_str())
            .to_string(),
        candidate.linked_in_url().to_string(),
        candidate.github_url().to_string(),
        candidate.tech_stack().join(TECH_SEPARATOR),
    ]
}
