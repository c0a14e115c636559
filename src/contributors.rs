use crate::cli::CommonArgs;
use crate::git::{parse_full_history, GitRunner};
use crate::model::{CommitRecord, ContributorSummary, ContributorsOutput};
use crate::timeago;
use anyhow::Context;
use chrono::{DateTime, Utc};
use console::style;
use std::collections::HashMap;

pub fn exec(common: CommonArgs, filter: Option<String>, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let runner = GitRunner::open(common.repo.as_deref()).context("Failed to open git repository")?;

    let log = runner.full_log().context("Failed to read commit history")?;
    let records = parse_full_history(&log).context("Failed to parse commit history")?;

    let contributors = compute_contributors(&records, Utc::now());
    let contributors = filter_contributors(contributors, filter.as_deref());

    if json {
        output_json(&contributors, &runner, filter)?;
    } else if ndjson {
        output_ndjson(&contributors)?;
    } else {
        output_table(&contributors);
    }

    Ok(())
}

/// Fold the commit stream into one summary per author, exact name match.
///
/// Summaries come out sorted by latest commit, newest first; authors whose
/// latest commits coincide stay in the order they first appeared in the log.
pub fn compute_contributors(records: &[CommitRecord], now: DateTime<Utc>) -> Vec<ContributorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(String, DateTime<Utc>, usize)> = Vec::new();

    for record in records {
        match index.get(record.author.as_str()) {
            Some(&i) => {
                let (_, latest, count) = &mut grouped[i];
                if record.timestamp > *latest {
                    *latest = record.timestamp;
                }
                *count += 1;
            }
            None => {
                index.insert(record.author.as_str(), grouped.len());
                grouped.push((record.author.clone(), record.timestamp, 1));
            }
        }
    }

    let mut contributors: Vec<ContributorSummary> = grouped
        .into_iter()
        .map(|(name, latest, count)| ContributorSummary {
            name,
            latest_commit: latest,
            relative_date: timeago::relative(latest, now),
            commit_count: count,
        })
        .collect();

    // Stable sort keeps first-appearance order for equal timestamps.
    contributors.sort_by(|a, b| b.latest_commit.cmp(&a.latest_commit));
    contributors
}

/// Case-insensitive substring match on the author name, applied after
/// aggregation so counts are unaffected.
pub fn filter_contributors(
    contributors: Vec<ContributorSummary>,
    filter: Option<&str>,
) -> Vec<ContributorSummary> {
    match filter {
        Some(needle) => {
            let needle = needle.to_lowercase();
            contributors
                .into_iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => contributors,
    }
}

fn output_json(
    contributors: &[ContributorSummary],
    runner: &GitRunner,
    filter: Option<String>,
) -> anyhow::Result<()> {
    let output = ContributorsOutput {
        version: crate::model::SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: runner.root().to_string_lossy().to_string(),
        filter,
        contributors: contributors.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(contributors: &[ContributorSummary]) -> anyhow::Result<()> {
    for c in contributors {
        println!("{}", serde_json::to_string(c)?);
    }
    Ok(())
}

fn output_table(contributors: &[ContributorSummary]) {
    println!(
        "{:<40} {:>8} {:<20}",
        style("Contributor").bold(),
        style("Commits").bold(),
        style("Latest Commit").bold()
    );
    println!("{}", "─".repeat(70));
    for c in contributors {
        println!("{:<40} {:>8} {:<20}", c.name, c.commit_count, c.relative_date);
    }
}
