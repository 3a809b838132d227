use crate::model::{ReportOutput, SCHEMA_VERSION};
use crate::rank::Ranking;
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Ndjson,
}

impl OutputFormat {
    pub fn from_flags(json: bool, ndjson: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Table
        }
    }
}

pub fn build_output(ranking: &Ranking, repo_path: Option<&Path>, subtree: &str) -> ReportOutput {
    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo_path.map(|p| p.to_string_lossy().to_string()),
        subtree: subtree.to_string(),
        rows: ranking.rows.clone(),
        totals: ranking.totals.clone(),
    }
}

pub fn output_json(ranking: &Ranking, repo_path: Option<&Path>, subtree: &str) -> Result<()> {
    let output = build_output(ranking, repo_path, subtree);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// One line per ranked row, then the totals.
pub fn output_ndjson(ranking: &Ranking) -> Result<()> {
    for row in &ranking.rows {
        println!("{}", serde_json::to_string(row)?);
    }
    println!("{}", serde_json::to_string(&ranking.totals)?);
    Ok(())
}

pub fn output_table(ranking: &Ranking, repo_path: Option<&Path>, subtree: &str) -> Result<()> {
    let source = repo_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<captured input>".to_string());
    let separator = "#".repeat(80);
    println!("{}", style(&separator).green());
    println!(
        "{}",
        style(format!("Summing up contributions for {source} subtree {subtree}")).green()
    );
    println!("{}", style(&separator).green());
    println!();

    println!(
        "{:<40} {:>22} {:>10} {:>8} {:>8}",
        style("Contributor").bold(),
        style("Additions - Deletions").bold(),
        style("Additions").bold(),
        style("Commits").bold(),
        style("Score").bold()
    );
    println!("{}", "─".repeat(92));

    if ranking.rows.is_empty() {
        println!("No contributions to display");
    }
    for row in &ranking.rows {
        println!(
            "{:<40} {:>22} {:>10} {:>8} {:>8}",
            row.contributor,
            format!("{:.3}%", row.difference_score),
            format!("{:.3}%", row.addition_score),
            format!("{:.3}%", row.commit_score),
            format!("{:.3}", row.share)
        );
    }

    println!("{}", "─".repeat(92));
    println!(
        "{:<40} {:>22} {:>10} {:>8} {:>8}",
        style("Total").bold(),
        ranking.totals.additions,
        ranking.totals.deletions,
        ranking.totals.commits,
        format!("{:.1}", ranking.totals.share)
    );
    Ok(())
}
