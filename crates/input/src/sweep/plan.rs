use std::collections::BTreeMap;

use tasklet_types::SweepEntry;

/// Multiset of stages to sweep, keyed by `(area, stage)`.
///
/// Every stored count is positive: an update that brings a count to zero or
/// below removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    counts: BTreeMap<(i64, i64), i64>,
}

impl SweepPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `times` to the stage, merging with any existing count.
    pub fn add(&mut self, area: i64, stage: i64, times: i64) {
        let count = self.counts.entry((area, stage)).or_insert(0);
        *count = count.saturating_add(times);
        if *count <= 0 {
            self.counts.remove(&(area, stage));
        }
    }

    /// Subtracts `times` from the stage; absent stages are left alone.
    pub fn subtract(&mut self, area: i64, stage: i64, times: i64) {
        let Some(count) = self.counts.get_mut(&(area, stage)) else {
            return;
        };
        *count = count.saturating_sub(times);
        if *count <= 0 {
            self.counts.remove(&(area, stage));
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn get(&self, area: i64, stage: i64) -> Option<i64> {
        self.counts.get(&(area, stage)).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in ascending `(area, stage)` order.
    pub fn entries(&self) -> impl Iterator<Item = SweepEntry> + '_ {
        self.counts
            .iter()
            .map(|(&(area, stage), &times)| SweepEntry::new(area, stage, times))
    }

    /// Serialized snapshot: `"A-B-T"` tokens in ascending `(area, stage)` order.
    pub fn to_tokens(&self) -> Vec<String> {
        self.entries().map(|entry| entry.to_string()).collect()
    }
}
