//! Data structures for representing the output.

use crate::vacancy::Year;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// Values per year, in increasing order of year.
pub type YearStats = BTreeMap<Year, u64>;

/// Values per location, in decreasing order of value.
pub type LocationStats<T> = Vec<(String, T)>;

/// Final statistics produced by the aggregation engine.
///
/// Salaries are in the reference currency, truncated to whole units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub year_salary: YearStats,
    pub year_count: YearStats,
    pub year_salary_filtered: YearStats,
    pub year_count_filtered: YearStats,
    pub location_salary: LocationStats<u64>,
    /// Fraction of all records, rounded to four decimals.
    pub location_share: LocationStats<f64>,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

pub fn pretty_years(stats: &YearStats) -> String {
    stats.iter().map(|(y, v)| format!("{y}: {v}")).join(", ")
}

pub fn pretty_locations<T: ToString>(stats: &LocationStats<T>) -> String {
    stats
        .iter()
        .map(|(loc, v)| format!("{loc}: {}", v.to_string()))
        .join(", ")
}
