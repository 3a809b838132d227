use crate::config::BlameSelection;
use crate::error::{GitRankError, Result};
use gix::discover;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Which tracked files a blame summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlameScope {
    All,
    Selected,
}

/// The external `git` collaborator. Every method returns raw command text for
/// the parsers, or fails the run.
pub struct GitRepo {
    path: PathBuf,
    progress: bool,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            path,
            progress: true,
        })
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `git log --numstat` with `'author|date'` record headers. The date format
    /// is pinned so a user's `log.date` setting cannot change it.
    pub fn history(&self) -> Result<String> {
        let pb = self.spinner("Gathering history (1/3)...");
        let out = self.run(&[
            "log",
            "--numstat",
            "--date=iso-strict",
            "--pretty=format:'%an|%ad'",
        ])?;
        pb.finish_and_clear();
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Per-author line counts over the tracked files at HEAD, one
    /// `{count} author {name}` line per author, largest count first.
    pub fn blame_summary(&self, scope: BlameScope, selection: &BlameSelection) -> Result<String> {
        let step = match scope {
            BlameScope::All => "Blaming tracked files (2/3)...",
            BlameScope::Selected => "Blaming selected files (3/3)...",
        };
        let pb = self.spinner(step);

        let listing = self.run(&["ls-tree", "-r", "-z", "HEAD"])?;
        let files: Vec<String> = blob_paths(&listing)
            .into_iter()
            .filter(|name| !selection.is_excluded(name))
            .filter(|name| scope == BlameScope::All || selection.is_selected(name))
            .collect();
        debug!(?scope, files = files.len(), "blaming files");

        let mut tally: HashMap<String, u64> = HashMap::new();
        for file in &files {
            let out = self.run(&["blame", "--line-porcelain", "HEAD", "--", file])?;
            for line in String::from_utf8_lossy(&out).lines() {
                if let Some(author) = line.strip_prefix("author ") {
                    *tally.entry(author.to_string()).or_insert(0) += 1;
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(render_summary(tally))
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(args)
            .output()?;
        if !output.status.success() {
            return Err(GitRankError::Git(format!(
                "git {}: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(output.stdout)
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb
    }
}

/// Paths of the `blob` records in `git ls-tree -z` output. Submodule
/// (`commit`) entries have nothing to blame and are dropped.
pub fn blob_paths(listing: &[u8]) -> Vec<String> {
    listing
        .split(|&b| b == 0)
        .filter_map(|record| {
            let record = String::from_utf8_lossy(record);
            let (meta, path) = record.split_once('\t')?;
            let kind = meta.split_whitespace().nth(1)?;
            (kind == "blob" && !path.is_empty()).then(|| path.to_string())
        })
        .collect()
}

fn render_summary(tally: HashMap<String, u64>) -> String {
    let mut authors: Vec<(String, u64)> = tally.into_iter().collect();
    authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    authors
        .into_iter()
        .map(|(name, count)| format!("{count:>7} author {name}\n"))
        .collect()
}
