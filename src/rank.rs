use crate::model::{ReportRow, ReportTotals, ScoredEntry};
use crate::report::Report;
use crate::score::percent_of;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

/// Orders scored entries by descending score, hiding entries scored zero.
/// Equal scores keep their registration order.
pub fn rank(entries: Vec<ScoredEntry>, report: &Report) -> Ranking {
    let mut visible: Vec<ScoredEntry> = entries.into_iter().filter(|e| e.score > 0.0).collect();
    visible.sort_by(|a, b| b.score.total_cmp(&a.score));

    let rows = visible
        .into_iter()
        .map(|e| ReportRow {
            share: percent_of(e.score, report.total_score),
            contributor: e.contributor,
            difference_score: e.difference_score,
            addition_score: e.addition_score,
            commit_score: e.commit_score,
            score: e.score,
        })
        .collect();

    Ranking {
        rows,
        totals: ReportTotals {
            additions: report.total_additions(),
            deletions: report.total_deletions(),
            commits: report.total_commits(),
            share: 100.0,
        },
    }
}
