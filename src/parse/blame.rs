use super::PassSummary;
use crate::error::Result;
use crate::identity::AliasResolver;
use crate::report::Report;
use tracing::{debug, info, warn};

/// One line of a blame summary: `{count} author {name...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlameLine<'a> {
    Blank,
    Entry { count: u64, author: String },
    InvalidCount(&'a str),
    Malformed,
}

impl<'a> BlameLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let tokens: Vec<&'a str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return BlameLine::Blank;
        }
        if tokens.len() < 3 {
            return BlameLine::Malformed;
        }
        match tokens[0].parse::<u64>() {
            Ok(count) => BlameLine::Entry {
                count,
                author: tokens[2..].join(" "),
            },
            Err(_) => BlameLine::InvalidCount(tokens[0]),
        }
    }
}

/// Feeds a blame summary into `report` as addition-only, undated
/// contributions. `pass` names the source in log output.
pub fn apply_blame(
    text: &str,
    report: &mut Report,
    aliases: &AliasResolver,
    pass: &str,
) -> Result<PassSummary> {
    let mut summary = PassSummary::default();

    for line in text.lines() {
        match BlameLine::parse(line) {
            BlameLine::Blank => continue,
            BlameLine::Entry { count, author } => {
                summary.lines += 1;
                let Some(name) = aliases.resolve(&author) else {
                    debug!(pass, author = author.as_str(), "skip user");
                    summary.suppressed += 1;
                    continue;
                };
                report.add_contributor(&name);
                report.increment_counters(&name, count, 0, None)?;
                summary.applied += 1;
            }
            BlameLine::InvalidCount(count) => {
                summary.lines += 1;
                summary.skipped += 1;
                warn!(pass, count, line, "skip blame contribution with non-numeric count");
            }
            BlameLine::Malformed => {
                summary.lines += 1;
                summary.skipped += 1;
                warn!(pass, line, "unprocessed line");
            }
        }
    }

    info!(
        pass,
        lines = summary.lines,
        applied = summary.applied,
        suppressed = summary.suppressed,
        skipped = summary.skipped,
        "pass complete"
    );
    Ok(summary)
}
