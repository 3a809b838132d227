use crate::model::{Bucket, Period};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Periods grouped by owner, each owner's list kept in configuration order.
#[derive(Debug, Clone, Default)]
pub struct PeriodIndex {
    by_owner: HashMap<String, Vec<Period>>,
}

impl PeriodIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, period: Period) {
        self.by_owner
            .entry(period.owner.clone())
            .or_default()
            .push(period);
    }

    pub fn periods_for(&self, name: &str) -> &[Period] {
        self.by_owner.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<Period> for PeriodIndex {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        let mut index = PeriodIndex::new();
        for period in iter {
            index.push(period);
        }
        index
    }
}

/// Picks the bucket an event belongs to and returns its index.
///
/// The first period bucket whose window contains `date` wins, so overlapping
/// periods resolve in configuration order. Undated events, and events outside
/// every window, land in bucket 0.
pub fn select_bucket(buckets: &[Bucket], date: Option<&DateTime<Utc>>) -> usize {
    let Some(date) = date else {
        return 0;
    };
    if buckets.len() > 1 {
        if let Some(idx) = buckets.iter().position(|b| b.covers(date)) {
            return idx;
        }
    }
    0
}
