//! Filter-aggregate engine: select rows by day and sex, then sum `total_bill`
//! per (day, sex) group.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use tipboard_common::SelectionError;

use crate::dataset::{DimensionDomain, TipsDataset};

/// Allowed values per dimension. An empty set means nothing is selected,
/// never "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub days: BTreeSet<String>,
    pub sexes: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<D, S>(days: D, sexes: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            sexes: sexes.into_iter().map(Into::into).collect(),
        }
    }

    /// Every value of both domains.
    pub fn all(domain: &DimensionDomain) -> Self {
        Self::new(domain.days.iter().cloned(), domain.sexes.iter().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() || self.sexes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub day: String,
    pub sex: String,
}

impl GroupKey {
    pub fn new(day: impl Into<String>, sex: impl Into<String>) -> Self {
        Self { day: day.into(), sex: sex.into() }
    }
}

/// Summed `total_bill` per (day, sex). Only groups with at least one matching
/// row are present. Iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    groups: BTreeMap<GroupKey, f64>,
}

impl AggregateResult {
    pub fn get(&self, day: &str, sex: &str) -> Option<f64> {
        self.groups.get(&GroupKey::new(day, sex)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, f64)> + '_ {
        self.groups.iter().map(|(k, v)| (k, *v))
    }

    pub fn groups(&self) -> &BTreeMap<GroupKey, f64> {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

}

impl TipsDataset {
    /// Filter rows by the selection and sum `total_bill` per (day, sex).
    ///
    /// Rows are folded in table order, so the same selection always yields
    /// bit-identical sums.
    pub fn aggregate(&self, selection: &FilterSelection) -> Result<AggregateResult, SelectionError> {
        if selection.is_empty() {
            return Err(SelectionError::EmptySelection);
        }

        let mut groups: BTreeMap<GroupKey, f64> = BTreeMap::new();
        for row in self.rows() {
            if selection.days.contains(&row.day) && selection.sexes.contains(&row.sex) {
                *groups.entry(GroupKey::new(&row.day, &row.sex)).or_insert(0.0) += row.total_bill;
            }
        }

        if groups.is_empty() {
            return Err(SelectionError::NoMatch);
        }

        debug!(
            days = selection.days.len(),
            sexes = selection.sexes.len(),
            groups = groups.len(),
            "Aggregated total_bill"
        );
        Ok(AggregateResult { groups })
    }
}
