//! Stage catalog tables.
//!
//! The editors only read membership from these tables. The normal table groups
//! the stages of each area into a `left` and a `right` half (the two pages of
//! the in-game map); the hard table lists stages directly.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Read-only membership lookup used by the sweep editors.
pub trait StageCatalog: Debug + Send + Sync {
    /// Whether the primary id is known.
    fn has_area(&self, area: i64) -> bool;

    /// Whether `stage` is a valid secondary id under `area`.
    fn has_stage(&self, area: i64, stage: i64) -> bool;

    /// All stages of `area` for the `all` shorthand, or `None` when the
    /// catalog does not support it.
    fn all_stages(&self, area: i64) -> Option<Vec<i64>>;

    /// Display label of a stage in operator diagnostics.
    fn stage_label(&self, area: i64, stage: i64) -> String {
        format!("{area}-{stage}")
    }
}

/// Both halves of a normal area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaStages {
    #[serde(default)]
    pub left: BTreeSet<i64>,
    #[serde(default)]
    pub right: BTreeSet<i64>,
}

impl AreaStages {
    pub fn contains(&self, stage: i64) -> bool {
        self.left.contains(&stage) || self.right.contains(&stage)
    }

    /// Union of both halves in ascending order.
    pub fn all(&self) -> Vec<i64> {
        self.left.union(&self.right).copied().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalCatalog {
    areas: BTreeMap<i64, AreaStages>,
}

impl NormalCatalog {
    pub fn with_area(mut self, area: i64, left: impl IntoIterator<Item = i64>, right: impl IntoIterator<Item = i64>) -> Self {
        self.areas.insert(
            area,
            AreaStages {
                left: left.into_iter().collect(),
                right: right.into_iter().collect(),
            },
        );
        self
    }

    pub fn area(&self, area: i64) -> Option<&AreaStages> {
        self.areas.get(&area)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl StageCatalog for NormalCatalog {
    fn has_area(&self, area: i64) -> bool {
        self.areas.contains_key(&area)
    }

    fn has_stage(&self, area: i64, stage: i64) -> bool {
        self.areas.get(&area).is_some_and(|stages| stages.contains(stage))
    }

    fn all_stages(&self, area: i64) -> Option<Vec<i64>> {
        self.areas.get(&area).map(AreaStages::all)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardCatalog {
    areas: BTreeMap<i64, BTreeSet<i64>>,
}

impl HardCatalog {
    pub fn with_area(mut self, area: i64, stages: impl IntoIterator<Item = i64>) -> Self {
        self.areas.insert(area, stages.into_iter().collect());
        self
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl StageCatalog for HardCatalog {
    fn has_area(&self, area: i64) -> bool {
        self.areas.contains_key(&area)
    }

    fn has_stage(&self, area: i64, stage: i64) -> bool {
        self.areas.get(&area).is_some_and(|stages| stages.contains(&stage))
    }

    fn all_stages(&self, _area: i64) -> Option<Vec<i64>> {
        None
    }

    fn stage_label(&self, area: i64, stage: i64) -> String {
        format!("H{area}-{stage}")
    }
}

/// The catalog document: `{ "normal": {...}, "hard": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCatalogs {
    #[serde(default)]
    pub normal: NormalCatalog,
    #[serde(default)]
    pub hard: HardCatalog,
}
