use crate::cli::CommonArgs;
use crate::detect::detect_frameworks;
use crate::git::{parse_file_listing, GitRunner};
use crate::lang::{classify, extension_of};
use crate::model::{DeveloperOutput, DeveloperStats, LanguageCount};
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::collections::HashMap;

pub fn exec(common: CommonArgs, author: String, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let runner = GitRunner::open(common.repo.as_deref()).context("Failed to open git repository")?;

    let listing = runner
        .files_for_author(&author)
        .context("Failed to list files for author")?;
    let files = parse_file_listing(&listing);
    let commit_count = runner
        .commit_count(&author)
        .context("Failed to count commits for author")?;

    let stats = compute_developer_stats(&files, commit_count);

    if json {
        output_json(&stats, &runner, &author)?;
    } else if ndjson {
        output_ndjson(&stats)?;
    } else {
        output_table(&stats, &author);
    }

    Ok(())
}

/// Derive language and tooling stats from the author's file listing.
///
/// A path touched in several commits appears once per commit and counts each
/// time, so the numbers measure activity rather than unique files. Paths
/// without an extension carry no language but still feed framework detection.
pub fn compute_developer_stats(files: &[String], commit_count: usize) -> DeveloperStats {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LanguageCount> = Vec::new();

    for path in files {
        let extension = extension_of(path);
        if extension.is_empty() {
            continue;
        }
        let language = classify(extension);
        match index.get(language) {
            Some(&i) => counts[i].files += 1,
            None => {
                index.insert(language, counts.len());
                counts.push(LanguageCount {
                    language: language.to_string(),
                    files: 1,
                });
            }
        }
    }

    // Stable sort keeps first-encounter order for equal counts.
    counts.sort_by(|a, b| b.files.cmp(&a.files));

    let languages = counts.iter().map(|c| c.language.clone()).collect();

    DeveloperStats {
        commit_count,
        languages,
        language_file_counts: counts,
        frameworks: detect_frameworks(files),
    }
}

fn output_json(stats: &DeveloperStats, runner: &GitRunner, author: &str) -> anyhow::Result<()> {
    let output = DeveloperOutput {
        version: crate::model::SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: runner.root().to_string_lossy().to_string(),
        author: author.to_string(),
        stats: stats.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(stats: &DeveloperStats) -> anyhow::Result<()> {
    for count in &stats.language_file_counts {
        println!("{}", serde_json::to_string(count)?);
    }
    Ok(())
}

fn output_table(stats: &DeveloperStats, author: &str) {
    println!("{} {}", style("Developer:").bold(), author);
    println!("{} {}", style("Commits:").bold(), stats.commit_count);
    if !stats.frameworks.is_empty() {
        let tools: Vec<&str> = stats.frameworks.iter().map(String::as_str).collect();
        println!("{} {}", style("Tools & Frameworks:").bold(), tools.join(" | "));
    }
    println!();
    println!("{:<30} {:>8}", style("Language").bold(), style("Files").bold());
    println!("{}", "─".repeat(39));
    for count in &stats.language_file_counts {
        println!("{:<30} {:>8}", count.language, count.files);
    }
}
