//! Dataset store: rows of the tips table plus the distinct values of the two
//! filter dimensions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use tracing::info;

use tipboard_common::Result;

/// Restaurant bills, one row per party.
const BUNDLED_TIPS_CSV: &str = include_str!("../data/tips.csv");

/// One row of the tips table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipRecord {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: String,
    pub smoker: String,
    pub day: String,
    pub time: String,
    pub size: u32,
}

/// Distinct values of the filter dimensions, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DimensionDomain {
    pub days: Vec<String>,
    pub sexes: Vec<String>,
}

impl DimensionDomain {
    fn from_rows(rows: &[TipRecord]) -> Self {
        let days: BTreeSet<&str> = rows.iter().map(|r| r.day.as_str()).collect();
        let sexes: BTreeSet<&str> = rows.iter().map(|r| r.sex.as_str()).collect();
        Self {
            days: days.into_iter().map(str::to_string).collect(),
            sexes: sexes.into_iter().map(str::to_string).collect(),
        }
    }

    /// Position of a day in the domain, used for display ordering.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    pub fn sex_index(&self, sex: &str) -> Option<usize> {
        self.sexes.iter().position(|s| s == sex)
    }
}

/// Immutable in-memory table with its precomputed domains.
#[derive(Debug, Clone)]
pub struct TipsDataset {
    rows: Vec<TipRecord>,
    domain: DimensionDomain,
}

impl TipsDataset {
    pub fn new(rows: Vec<TipRecord>) -> Self {
        let domain = DimensionDomain::from_rows(&rows);
        Self { rows, domain }
    }

    /// Parse the table compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let dataset = Self::from_csv_reader(BUNDLED_TIPS_CSV.as_bytes())?;
        info!(
            rows = dataset.len(),
            days = ?dataset.domain.days,
            sexes = ?dataset.domain.sexes,
            "Loaded tips dataset"
        );
        Ok(dataset)
    }

    /// Parse a headered CSV with the tips columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let rows = reader
            .deserialize::<TipRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[TipRecord] {
        &self.rows
    }

    pub fn domain(&self) -> &DimensionDomain {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_dataset_loads() {
        let ds = TipsDataset::bundled().unwrap();
        assert_eq!(ds.len(), 244);
        assert!(ds.rows().iter().all(|r| r.total_bill > 0.0));
    }

    #[test]
    fn test_bundled_rows_per_day() {
        let ds = TipsDataset::bundled().unwrap();
        let count = |day: &str| ds.rows().iter().filter(|r| r.day == day).count();
        assert_eq!([count("Fri"), count("Sat"), count("Sun"), count("Thur")], [19, 87, 76, 62]);
    }

    #[test]
    fn test_domains_are_sorted_distinct_values() {
        let ds = TipsDataset::bundled().unwrap();
        assert_eq!(ds.domain().days, vec!["Fri", "Sat", "Sun", "Thur"]);
        assert_eq!(ds.domain().sexes, vec!["Female", "Male"]);
    }

    #[test]
    fn test_domain_index_lookup() {
        let ds = TipsDataset::bundled().unwrap();
        assert_eq!(ds.domain().day_index("Sun"), Some(2));
        assert_eq!(ds.domain().sex_index("Male"), Some(1));
        assert_eq!(ds.domain().day_index("Mon"), None);
    }

    #[test]
    fn test_from_csv_reader_rejects_bad_measure() {
        let csv = "total_bill,tip,sex,smoker,day,time,size\nabc,1.0,Male,No,Sun,Dinner,2\n";
        assert!(TipsDataset::from_csv_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_table_has_empty_domain() {
        let ds = TipsDataset::new(vec![]);
        assert!(ds.is_empty());
        assert_eq!(ds.domain(), &DimensionDomain::default());
    }
}
