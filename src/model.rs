use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const SCHEMA_VERSION: u32 = 1;

/// One line of the full-history log: `<author>|<unix-seconds> <tz-offset>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorSummary {
    pub name: String,
    pub latest_commit: DateTime<Utc>,
    pub relative_date: String,
    pub commit_count: usize,
}

/// One row of the language breakdown; rows are kept in descending
/// file-count order, ties in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperStats {
    pub commit_count: usize,
    pub languages: BTreeSet<String>,
    pub language_file_counts: Vec<LanguageCount>,
    pub frameworks: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub filter: Option<String>,
    pub contributors: Vec<ContributorSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub author: String,
    pub stats: DeveloperStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub contributor: ContributorSummary,
    pub stats: DeveloperStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub entries: Vec<ReportEntry>,
}
