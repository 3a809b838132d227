use super::PassSummary;
use crate::error::Result;
use crate::identity::{strip_quotes, AliasResolver};
use crate::report::Report;
use crate::util::{is_within_subtree, parse_git_date};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// One line of `git log --numstat --pretty='%an|%ad'` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryLine<'a> {
    Blank,
    /// `author|date`, quotes already stripped.
    Header { author: &'a str, date: &'a str },
    /// `additions<TAB>deletions<TAB>path`. Binary markers (`-`) count as zero.
    Change {
        additions: u64,
        deletions: u64,
        path: &'a str,
    },
    Malformed,
}

impl<'a> HistoryLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return HistoryLine::Blank;
        }

        let fields: Vec<&'a str> = line.split('\t').collect();
        match fields.len() {
            1 => parse_header(fields[0]),
            3 if !fields[2].trim().is_empty() => HistoryLine::Change {
                additions: parse_count(fields[0]),
                deletions: parse_count(fields[1]),
                path: fields[2],
            },
            _ => HistoryLine::Malformed,
        }
    }
}

fn parse_header(field: &str) -> HistoryLine<'_> {
    let Some((author, date)) = field.rsplit_once('|') else {
        return HistoryLine::Malformed;
    };
    let author = strip_quotes(author);
    if author.is_empty() {
        return HistoryLine::Malformed;
    }
    HistoryLine::Header {
        author,
        date: strip_quotes(date),
    }
}

fn parse_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

enum Record {
    None,
    Suppressed,
    Active {
        name: String,
        date: DateTime<Utc>,
        counted: bool,
    },
}

/// Feeds history text into `report`.
///
/// A commit is counted once per header, on its first change line inside
/// `subtree`; headers without such a line add nothing.
pub fn apply_history(
    text: &str,
    report: &mut Report,
    aliases: &AliasResolver,
    subtree: &str,
) -> Result<PassSummary> {
    let mut summary = PassSummary::default();
    let mut record = Record::None;

    for line in text.lines() {
        let parsed = HistoryLine::parse(line);
        if parsed == HistoryLine::Blank {
            continue;
        }
        summary.lines += 1;

        match parsed {
            HistoryLine::Blank => {}
            HistoryLine::Header { author, date } => {
                record = match aliases.resolve(author) {
                    Some(name) => {
                        let date = parse_git_date(date).unwrap_or_else(|| {
                            warn!(pass = "history", date, "unparseable commit date, using epoch");
                            DateTime::<Utc>::UNIX_EPOCH
                        });
                        Record::Active {
                            name,
                            date,
                            counted: false,
                        }
                    }
                    None => {
                        debug!(pass = "history", author, "skip user");
                        Record::Suppressed
                    }
                };
            }
            HistoryLine::Change {
                additions,
                deletions,
                path,
            } => match &mut record {
                Record::None => {
                    warn!(pass = "history", line, "change line without a commit header");
                    summary.skipped += 1;
                }
                Record::Suppressed => summary.suppressed += 1,
                Record::Active {
                    name,
                    date,
                    counted,
                } => {
                    if !is_within_subtree(path, subtree) {
                        summary.filtered += 1;
                        continue;
                    }
                    if !*counted {
                        *counted = true;
                        report.add_contributor(name);
                        report.increment_commits(name, Some(&*date))?;
                    }
                    report.increment_counters(name, additions, deletions, Some(&*date))?;
                    summary.applied += 1;
                }
            },
            HistoryLine::Malformed => {
                warn!(pass = "history", line, "unprocessed line");
                summary.skipped += 1;
                // a broken header must not leak its changes into the previous commit
                if !line.contains('\t') {
                    record = Record::None;
                }
            }
        }
    }

    info!(
        pass = "history",
        lines = summary.lines,
        applied = summary.applied,
        filtered = summary.filtered,
        suppressed = summary.suppressed,
        skipped = summary.skipped,
        "pass complete"
    );
    Ok(summary)
}
