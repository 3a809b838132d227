use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// A named time window attributed to one contributor. `start` is inclusive,
/// `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub owner: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

/// Running counters for one contributor within one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub additions: u64,
    pub deletions: u64,
    pub commits: u64,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}

impl Bucket {
    pub fn new(name: String) -> Self {
        Self {
            name,
            additions: 0,
            deletions: 0,
            commits: 0,
            period_start: None,
            period_end: None,
        }
    }

    pub fn for_period(contributor: &str, period: &Period) -> Self {
        let name = if period.label.is_empty() {
            contributor.to_string()
        } else {
            format!("{} ({})", contributor, period.label)
        };
        Self {
            period_start: Some(period.start),
            period_end: Some(period.end),
            ..Self::new(name)
        }
    }

    /// Only period buckets have a window; the catch-all bucket never matches.
    pub fn covers(&self, at: &DateTime<Utc>) -> bool {
        match (self.period_start, self.period_end) {
            (Some(start), Some(end)) => at >= &start && at < &end,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRecord {
    pub name: String,
    pub buckets: Vec<Bucket>,
}

impl ContributorRecord {
    /// With periods, bucket 0 is the "otherwise" bucket followed by one bucket
    /// per period in the order given. Without periods there is a single bucket.
    pub fn new(name: &str, periods: &[Period]) -> Self {
        let buckets = if periods.is_empty() {
            vec![Bucket::new(name.to_string())]
        } else {
            let mut buckets = Vec::with_capacity(periods.len() + 1);
            buckets.push(Bucket::new(format!("{name} (otherwise)")));
            buckets.extend(periods.iter().map(|p| Bucket::for_period(name, p)));
            buckets
        };
        Self {
            name: name.to_string(),
            buckets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub contributor: String,
    pub additions: u64,
    pub deletions: u64,
    pub commits: u64,
    pub difference_score: f64,
    pub addition_score: f64,
    pub commit_score: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub contributor: String,
    pub difference_score: f64,
    pub addition_score: f64,
    pub commit_score: f64,
    pub score: f64,
    /// Percentage of the summed score of every scored entry.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub additions: u64,
    pub deletions: u64,
    pub commits: u64,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: Option<String>,
    pub subtree: String,
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}
