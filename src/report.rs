use crate::error::{GitRankError, Result};
use crate::model::ContributorRecord;
use crate::period::{select_bucket, PeriodIndex};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// The contribution ledger for one run plus its grand totals.
///
/// Every increment updates the selected bucket and the matching total in the
/// same call, so the totals always equal the sum over all buckets.
#[derive(Debug, Default)]
pub struct Report {
    contributors: Vec<ContributorRecord>,
    index: HashMap<String, usize>,
    periods: PeriodIndex,
    total_additions: u64,
    total_deletions: u64,
    total_commits: u64,
    pub total_score: f64,
}

impl Report {
    pub fn new(periods: PeriodIndex) -> Self {
        Self {
            periods,
            ..Self::default()
        }
    }

    pub fn has_contributor(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registers `name` with buckets for its configured periods. Registering a
    /// known name is a no-op.
    pub fn add_contributor(&mut self, name: &str) {
        if self.has_contributor(name) {
            return;
        }
        let record = ContributorRecord::new(name, self.periods.periods_for(name));
        self.index.insert(name.to_string(), self.contributors.len());
        self.contributors.push(record);
    }

    pub fn increment_counters(
        &mut self,
        name: &str,
        additions: u64,
        deletions: u64,
        date: Option<&DateTime<Utc>>,
    ) -> Result<()> {
        let record = self.record_mut(name)?;
        let idx = select_bucket(&record.buckets, date);
        let bucket = &mut record.buckets[idx];
        bucket.additions += additions;
        bucket.deletions += deletions;
        self.total_additions += additions;
        self.total_deletions += deletions;
        Ok(())
    }

    pub fn increment_commits(&mut self, name: &str, date: Option<&DateTime<Utc>>) -> Result<()> {
        let record = self.record_mut(name)?;
        let idx = select_bucket(&record.buckets, date);
        record.buckets[idx].commits += 1;
        self.total_commits += 1;
        Ok(())
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut ContributorRecord> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| GitRankError::UnknownContributor(name.to_string()))?;
        Ok(&mut self.contributors[idx])
    }

    pub fn contributor(&self, name: &str) -> Option<&ContributorRecord> {
        self.index.get(name).map(|&idx| &self.contributors[idx])
    }

    /// Contributors in first-seen order.
    pub fn contributors(&self) -> impl Iterator<Item = &ContributorRecord> {
        self.contributors.iter()
    }

    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    pub fn total_additions(&self) -> u64 {
        self.total_additions
    }

    pub fn total_deletions(&self) -> u64 {
        self.total_deletions
    }

    pub fn total_commits(&self) -> u64 {
        self.total_commits
    }
}
