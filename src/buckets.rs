//! Per-year and per-location accumulators.

use crate::mean::RunningMean;
use crate::vacancy::Year;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A closed range of years, `first..=last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct YearRange {
    pub first: Year,
    pub last: Year,
}

/// Years covered by the statistics.
pub const DEFAULT_YEARS: YearRange = YearRange {
    first: 2007,
    last: 2022,
};

impl YearRange {
    pub fn contains(&self, year: Year) -> bool {
        self.first <= year && year <= self.last
    }

    fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first) as usize + 1
        }
    }

    pub fn years(&self) -> impl Iterator<Item = Year> {
        self.first..=self.last
    }
}

/// One running mean for every year in the range, zero until fed.
#[derive(Clone, Debug)]
pub struct YearBuckets {
    range: YearRange,
    buckets: Vec<RunningMean>,
}

impl YearBuckets {
    pub fn new(range: YearRange) -> YearBuckets {
        YearBuckets {
            range,
            buckets: vec![RunningMean::new(); range.len()],
        }
    }

    /// Returns `false` if the year is outside the range; nothing is recorded then.
    pub fn feed(&mut self, year: Year, value: f64) -> bool {
        if !self.range.contains(year) {
            return false;
        }
        self.buckets[(year - self.range.first) as usize].feed(value);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, &RunningMean)> {
        self.range.years().zip(self.buckets.iter())
    }
}

/// Number of records per location, in order of first appearance, and overall.
///
/// Whether a location is reported at all depends on the overall total,
/// so this has to be complete before any location is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationTotals {
    total: u64,
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl LocationTotals {
    pub fn new() -> LocationTotals {
        LocationTotals::default()
    }

    /// Counting pass over a complete list of locations.
    pub fn count<'a>(locations: impl IntoIterator<Item = &'a str>) -> LocationTotals {
        let mut totals = LocationTotals::new();
        for location in locations {
            totals.add(location);
        }
        totals
    }

    pub fn add(&mut self, location: &str) {
        self.total += 1;
        match self.counts.get_mut(location) {
            Some(c) => *c += 1,
            None => {
                self.order.push(location.to_owned());
                self.counts.insert(location.to_owned(), 1);
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get(&self, location: &str) -> u64 {
        self.counts.get(location).copied().unwrap_or(0)
    }

    /// Minimum number of records for a location to be reported: 1% of all records, rounded down.
    pub fn threshold(&self) -> u64 {
        self.total / 100
    }

    pub fn is_included(&self, location: &str) -> bool {
        self.get(location) >= self.threshold()
    }

    /// Locations that reach the threshold, in order of first appearance.
    pub fn included(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .map(String::as_str)
            .filter(|loc| self.is_included(loc))
    }

    pub fn locations(&self) -> usize {
        self.order.len()
    }
}

/// Running mean of the salary per location.
#[derive(Clone, Debug, Default)]
pub struct LocationBuckets {
    buckets: HashMap<String, RunningMean>,
}

impl LocationBuckets {
    pub fn new() -> LocationBuckets {
        LocationBuckets::default()
    }

    pub fn feed(&mut self, location: &str, value: f64) {
        match self.buckets.get_mut(location) {
            Some(m) => m.feed(value),
            None => {
                let mut m = RunningMean::new();
                m.feed(value);
                self.buckets.insert(location.to_owned(), m);
            }
        }
    }

    pub fn get(&self, location: &str) -> Option<&RunningMean> {
        self.buckets.get(location)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_range() {
        assert_eq!(DEFAULT_YEARS.len(), 16);
        assert!(DEFAULT_YEARS.contains(2007));
        assert!(DEFAULT_YEARS.contains(2022));
        assert!(!DEFAULT_YEARS.contains(2006));
        assert!(!DEFAULT_YEARS.contains(2023));
    }

    #[test]
    fn year_buckets_start_zero() {
        let b = YearBuckets::new(DEFAULT_YEARS);
        assert_eq!(b.iter().count(), 16);
        let years: Vec<Year> = b.iter().map(|(y, _)| y).collect();
        assert_eq!(years, (2007..=2022).collect::<Vec<Year>>());
        assert!(b.iter().all(|(_, m)| m.is_empty() && m.mean == 0.0));
    }

    #[test]
    fn year_buckets_feed() {
        let mut b = YearBuckets::new(DEFAULT_YEARS);
        assert!(b.feed(2022, 10.0));
        assert!(b.feed(2022, 20.0));
        assert!(b.feed(2007, 5.0));
        assert!(!b.feed(2023, 1000.0));
        assert!(!b.feed(1999, 1000.0));
        assert_eq!(b.iter().count(), 16);
        let m: Vec<(Year, RunningMean)> = b
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(y, m)| (y, *m))
            .collect();
        assert_eq!(
            m,
            [
                (2007, RunningMean { mean: 5.0, count: 1 }),
                (2022, RunningMean { mean: 15.0, count: 2 }),
            ]
        );
    }

    #[test]
    fn totals_and_threshold() {
        let mut locations = vec!["a"; 150];
        locations.extend(vec!["b"; 48]);
        locations.extend(vec!["c"; 2]);
        locations.push("d");
        let t = LocationTotals::count(locations);
        assert_eq!(t.total(), 201);
        assert_eq!(t.threshold(), 2);
        assert_eq!(t.get("a"), 150);
        assert_eq!(t.get("zzz"), 0);
        assert_eq!(t.locations(), 4);
        assert_eq!(t.included().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn small_input_includes_everything() {
        let t = LocationTotals::count(["x", "y", "x", "z"]);
        assert_eq!(t.threshold(), 0);
        assert_eq!(t.included().collect::<Vec<_>>(), ["x", "y", "z"]);
    }

    #[test]
    fn location_buckets() {
        let mut b = LocationBuckets::new();
        b.feed("x", 10.0);
        b.feed("y", 1.0);
        b.feed("x", 30.0);
        assert_eq!(b.get("x"), Some(&RunningMean { mean: 20.0, count: 2 }));
        assert_eq!(b.get("y"), Some(&RunningMean { mean: 1.0, count: 1 }));
        assert_eq!(b.get("z"), None);
    }
}
