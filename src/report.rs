use crate::cli::CommonArgs;
use crate::contributors::compute_contributors;
use crate::developer::compute_developer_stats;
use crate::git::{parse_file_listing, parse_full_history, GitRunner};
use crate::model::{ReportEntry, ReportOutput};
use anyhow::Context;
use chrono::Utc;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Full-repository report: every contributor with their developer stats.
///
/// Runs the per-author queries once per contributor, so cost grows with the
/// number of authors. Progress is drawn to stderr in table mode and hidden
/// for machine output.
pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let runner = GitRunner::open(common.repo.as_deref()).context("Failed to open git repository")?;

    let log = runner.full_log().context("Failed to read commit history")?;
    let records = parse_full_history(&log).context("Failed to parse commit history")?;
    let contributors = compute_contributors(&records, Utc::now());

    let pb = if json || ndjson {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(contributors.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut entries = Vec::with_capacity(contributors.len());
    for contributor in contributors {
        pb.set_message(contributor.name.clone());
        let listing = runner
            .files_for_author(&contributor.name)
            .with_context(|| format!("Failed to list files for {}", contributor.name))?;
        let files = parse_file_listing(&listing);
        let commit_count = runner
            .commit_count(&contributor.name)
            .with_context(|| format!("Failed to count commits for {}", contributor.name))?;
        entries.push(ReportEntry {
            contributor,
            stats: compute_developer_stats(&files, commit_count),
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if json {
        output_json(&entries, &runner)?;
    } else if ndjson {
        output_ndjson(&entries)?;
    } else {
        output_table(&entries, started);
    }

    Ok(())
}

fn output_json(entries: &[ReportEntry], runner: &GitRunner) -> anyhow::Result<()> {
    let output = ReportOutput {
        version: crate::model::SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: runner.root().to_string_lossy().to_string(),
        entries: entries.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(entries: &[ReportEntry]) -> anyhow::Result<()> {
    for entry in entries {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

fn output_table(entries: &[ReportEntry], started: Instant) {
    for entry in entries {
        println!(
            "{}",
            style(format!(
                "{}: {}",
                entry.contributor.name, entry.contributor.relative_date
            ))
            .bold()
        );
        println!("  Commits: {}", entry.stats.commit_count);
        if !entry.stats.frameworks.is_empty() {
            let tools: Vec<&str> = entry.stats.frameworks.iter().map(String::as_str).collect();
            println!("  Tools & Frameworks: {}", tools.join(" | "));
        }
        for count in &entry.stats.language_file_counts {
            println!("  {:<28} {:>6}", count.language, count.files);
        }
        println!();
    }
    println!(
        "{}",
        style(format!(
            "Analyzed {} contributors in {:.2}s",
            entries.len(),
            started.elapsed().as_secs_f64()
        ))
        .dim()
    );
}
