//! Grouped bar chart model: x = day, color = sex, y = summed total_bill.

use serde::Serialize;
use tipboard_data::{AggregateResult, DimensionDomain};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend entry (a sex value).
    pub name: String,
    /// (category, value) pairs in category order. Categories without a
    /// group are left out, not drawn as zero.
    pub points: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// X-axis categories (days) in domain order.
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl BarChart {
    /// Build a grouped chart from an aggregate. The aggregate is a mapping;
    /// display order comes from the domain.
    pub fn grouped(title: impl Into<String>, result: &AggregateResult, domain: &DimensionDomain) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut names: Vec<String> = Vec::new();
        for (key, _) in result.iter() {
            if !categories.contains(&key.day) {
                categories.push(key.day.clone());
            }
            if !names.contains(&key.sex) {
                names.push(key.sex.clone());
            }
        }
        categories.sort_by_key(|d| (domain.day_index(d).unwrap_or(usize::MAX), d.clone()));
        names.sort_by_key(|s| (domain.sex_index(s).unwrap_or(usize::MAX), s.clone()));

        let series = names
            .into_iter()
            .map(|name| {
                let points = categories
                    .iter()
                    .filter_map(|day| result.get(day, &name).map(|v| (day.clone(), v)))
                    .collect();
                Series { name, points }
            })
            .collect();

        Self {
            title: title.into(),
            x_label: "day".to_string(),
            y_label: "total_bill".to_string(),
            legend_title: "sex".to_string(),
            categories,
            series,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, v)| *v))
            .fold(0.0, f64::max)
    }

    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
