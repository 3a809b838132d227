use crate::cli::CommonArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::{BlameScope, GitRepo};
use crate::output::{output_json, output_ndjson, output_table, OutputFormat};
use crate::parse::{apply_blame, apply_history};
use crate::rank::rank;
use crate::report::Report;
use crate::score::score_report;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs the three passes in order (history, full blame, selected blame) over
/// one fresh report.
pub fn parse_stats(
    history: &str,
    blame_raw: &str,
    blame_selected: &str,
    subtree: &str,
    config: &Config,
) -> Result<Report> {
    let aliases = config.alias_resolver();
    let mut report = Report::new(config.period_index()?);
    info!(subtree, "parsing the stats");

    apply_history(history, &mut report, &aliases, subtree)?;
    apply_blame(blame_raw, &mut report, &aliases, "blame")?;
    apply_blame(blame_selected, &mut report, &aliases, "blame-selected")?;

    Ok(report)
}

pub fn exec_report(
    common: CommonArgs,
    repo: Option<PathBuf>,
    json: bool,
    ndjson: bool,
) -> anyhow::Result<()> {
    let config = load_config(&common)?;
    let format = OutputFormat::from_flags(json, ndjson);

    let repo = GitRepo::open(repo.as_ref())
        .context("Failed to open git repository")?
        .with_progress(!common.quiet && format == OutputFormat::Table);

    let history = repo.history().context("Failed to read git history")?;
    let blame_raw = repo
        .blame_summary(BlameScope::All, &config.blame)
        .context("Failed to blame tracked files")?;
    let blame_selected = repo
        .blame_summary(BlameScope::Selected, &config.blame)
        .context("Failed to blame selected files")?;

    let report = parse_stats(&history, &blame_raw, &blame_selected, &common.subtree, &config)
        .context("Failed to aggregate contributions")?;

    render(report, &config, format, Some(repo.path()), &common.subtree)
}

pub fn exec_parse(
    common: CommonArgs,
    history: PathBuf,
    blame: Option<PathBuf>,
    blame_selected: Option<PathBuf>,
    json: bool,
    ndjson: bool,
) -> anyhow::Result<()> {
    let config = load_config(&common)?;
    let format = OutputFormat::from_flags(json, ndjson);

    let history = read_input(Some(&history))?;
    let blame_raw = read_input(blame.as_ref())?;
    let blame_selected = read_input(blame_selected.as_ref())?;

    let report = parse_stats(&history, &blame_raw, &blame_selected, &common.subtree, &config)
        .context("Failed to aggregate contributions")?;

    render(report, &config, format, None, &common.subtree)
}

fn load_config(common: &CommonArgs) -> anyhow::Result<Config> {
    match &common.config {
        Some(path) => {
            info!(path = %path.display(), "using the config file");
            Config::load(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file {}", p.display())),
        None => Ok(String::new()),
    }
}

fn render(
    mut report: Report,
    config: &Config,
    format: OutputFormat,
    repo_path: Option<&Path>,
    subtree: &str,
) -> anyhow::Result<()> {
    let entries = score_report(&mut report, &config.scoring);
    let ranking = rank(entries, &report);

    match format {
        OutputFormat::Json => output_json(&ranking, repo_path, subtree),
        OutputFormat::Ndjson => output_ndjson(&ranking),
        OutputFormat::Table => output_table(&ranking, repo_path, subtree),
    }
}
