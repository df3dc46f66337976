//! Filter selection from a raw query string.
//!
//! Repeated keys (`?days=Sat&days=Sun`) carry the selection. A key that is
//! absent selects its whole domain; a key that is present with only empty
//! values (`?days=`) selects nothing, which the engine reports as an empty
//! selection. Unknown keys are ignored.

use std::collections::BTreeSet;
use tipboard_data::{DimensionDomain, FilterSelection};
use url::form_urlencoded;

pub const DAYS_PARAM: &str = "days";
pub const SEXES_PARAM: &str = "sexes";

pub fn parse_selection(raw_query: Option<&str>, domain: &DimensionDomain) -> FilterSelection {
    let mut days: Option<BTreeSet<String>> = None;
    let mut sexes: Option<BTreeSet<String>> = None;

    for (key, value) in form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes()) {
        let slot = match key.as_ref() {
            DAYS_PARAM => &mut days,
            SEXES_PARAM => &mut sexes,
            _ => continue,
        };
        let values = slot.get_or_insert_with(BTreeSet::new);
        if !value.is_empty() {
            values.insert(value.into_owned());
        }
    }

    FilterSelection {
        days: days.unwrap_or_else(|| domain.days.iter().cloned().collect()),
        sexes: sexes.unwrap_or_else(|| domain.sexes.iter().cloned().collect()),
    }
}
