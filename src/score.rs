use crate::model::ScoredEntry;
use crate::report::Report;
use serde::{Deserialize, Serialize};

/// Weighting of the three score components and the visibility floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub difference_weight: f64,
    pub addition_weight: f64,
    pub commit_weight: f64,
    /// Raw scores below this are reported as zero.
    pub floor: f64,
    /// Divides the net-negative branch of the difference score.
    pub deletion_damping: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            difference_weight: 0.7,
            addition_weight: 0.15,
            commit_weight: 0.15,
            floor: 0.075,
            deletion_damping: 3.0,
        }
    }
}

impl ScoreWeights {
    pub fn raw_score(&self, difference: f64, addition: f64, commit: f64) -> f64 {
        self.difference_weight * difference
            + self.addition_weight * addition
            + self.commit_weight * commit
    }

    pub fn apply_floor(&self, raw: f64) -> f64 {
        if raw >= self.floor {
            raw
        } else {
            0.0
        }
    }

    pub fn final_score(&self, difference: f64, addition: f64, commit: f64) -> f64 {
        self.apply_floor(self.raw_score(difference, addition, commit))
    }

    /// Net growth, or the damped size of a net shrink, whichever is larger.
    pub fn net_change(&self, additions: u64, deletions: u64) -> f64 {
        let net = additions as f64 - deletions as f64;
        net.max(-net / self.deletion_damping)
    }
}

/// `part` as a percentage of `whole`; zero when `whole` is zero.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

/// Scores every bucket with at least one commit against the report's final
/// totals and stores the summed score in `report.total_score`.
///
/// Must run after every pass has been applied.
pub fn score_report(report: &mut Report, weights: &ScoreWeights) -> Vec<ScoredEntry> {
    let net_total = report.total_additions() as f64 - report.total_deletions() as f64;
    let total_additions = report.total_additions() as f64;
    let total_commits = report.total_commits() as f64;

    let entries: Vec<ScoredEntry> = report
        .contributors()
        .flat_map(|record| record.buckets.iter())
        .filter(|bucket| bucket.commits > 0)
        .map(|bucket| {
            let difference_score =
                percent_of(weights.net_change(bucket.additions, bucket.deletions), net_total);
            let addition_score = percent_of(bucket.additions as f64, total_additions);
            let commit_score = percent_of(bucket.commits as f64, total_commits);
            ScoredEntry {
                contributor: bucket.name.clone(),
                additions: bucket.additions,
                deletions: bucket.deletions,
                commits: bucket.commits,
                difference_score,
                addition_score,
                commit_score,
                score: weights.final_score(difference_score, addition_score, commit_score),
            }
        })
        .collect();

    report.total_score = entries.iter().map(|e| e.score).sum();
    entries
}
