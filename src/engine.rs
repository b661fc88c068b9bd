//! One-pass aggregation of vacancy records into per-year and per-location statistics.

use crate::buckets::{LocationBuckets, LocationTotals, YearBuckets, YearRange};
use crate::errors::{self, Result};
use crate::mean::RunningMean;
use crate::output::{LocationStats, Statistics, YearStats};
use crate::vacancy::VacancyRecord;
use itertools::Itertools;
use std::cmp::Ordering;

/// How many locations are reported in each location ranking.
pub const TOP_LOCATIONS: usize = 10;

struct Accumulator {
    all: YearBuckets,
    filtered: YearBuckets,
    totals: LocationTotals,
    locations: LocationBuckets,
}

enum State {
    Accumulating(Accumulator),
    Finalized(Statistics),
}

/// Consumes vacancy records and produces [Statistics].
///
/// Records are fed with [AggregationEngine::ingest]; once [AggregationEngine::finalize]
/// has been called the engine only hands out the same statistics again.
pub struct AggregationEngine {
    years: YearRange,
    state: State,
}

impl AggregationEngine {
    pub fn new(years: YearRange) -> AggregationEngine {
        AggregationEngine {
            years,
            state: State::Accumulating(Accumulator {
                all: YearBuckets::new(years),
                filtered: YearBuckets::new(years),
                totals: LocationTotals::new(),
                locations: LocationBuckets::new(),
            }),
        }
    }

    /// Adds one record.
    ///
    /// Records published outside the year range still count for the locations.
    /// A record whose salary cannot be converted leaves the engine untouched.
    pub fn ingest(&mut self, record: &VacancyRecord, title_filter: &str) -> Result<()> {
        let acc = match &mut self.state {
            State::Accumulating(acc) => acc,
            State::Finalized(_) => {
                return Err(errors::invalid_state_ref(
                    "cannot ingest records after finalizing",
                ));
            }
        };
        let value = record.salary.reference_value()?;
        acc.all.feed(record.year, value);
        if record.matches_title(title_filter) {
            acc.filtered.feed(record.year, value);
        }
        acc.totals.add(&record.location);
        acc.locations.feed(&record.location, value);
        Ok(())
    }

    /// Produces the final statistics. Calling this again returns the same result.
    pub fn finalize(&mut self) -> Statistics {
        let stats = match &self.state {
            State::Finalized(stats) => return stats.clone(),
            State::Accumulating(acc) => summarize(self.years, acc),
        };
        self.state = State::Finalized(stats.clone());
        stats
    }
}

fn summarize(years: YearRange, acc: &Accumulator) -> Statistics {
    let (location_salary, location_share) = location_stats(&acc.totals, &acc.locations);
    Statistics {
        year_salary: year_stats(years, &acc.all, |m| m.mean.trunc() as u64),
        year_count: year_stats(years, &acc.all, |m| m.count),
        year_salary_filtered: year_stats(years, &acc.filtered, |m| m.mean.trunc() as u64),
        year_count_filtered: year_stats(years, &acc.filtered, |m| m.count),
        location_salary,
        location_share,
    }
}

/// Keeps the non-zero years; an all-zero result becomes `{last year: 0}`.
fn year_stats<F>(years: YearRange, buckets: &YearBuckets, value: F) -> YearStats
where
    F: Fn(&RunningMean) -> u64,
{
    let mut stats: YearStats = buckets
        .iter()
        .map(|(y, m)| (y, value(m)))
        .filter(|&(_, v)| v != 0)
        .collect();
    if stats.is_empty() {
        stats.insert(years.last, 0);
    }
    stats
}

fn descending(a: &f64, b: &f64) -> Ordering {
    b.total_cmp(a)
}

/// Rounds to four decimal places, ties to even on the exact binary value.
pub fn round4(x: f64) -> f64 {
    format!("{x:.4}").parse().unwrap_or(x)
}

/// The two location rankings. Each one is sorted by its own value,
/// so they do not necessarily list the same locations in the same order.
fn location_stats(
    totals: &LocationTotals,
    buckets: &LocationBuckets,
) -> (LocationStats<u64>, LocationStats<f64>) {
    let percent = totals.total() as f64 / 100.0;
    let mut salary = vec![];
    let mut share = vec![];
    for loc in totals.included() {
        if let Some(m) = buckets.get(loc) {
            salary.push((loc.to_owned(), m.mean));
            share.push((loc.to_owned(), round4(m.count as f64 / percent / 100.0)));
        }
    }
    salary.sort_by(|a, b| descending(&a.1, &b.1));
    share.sort_by(|a, b| descending(&a.1, &b.1));
    let salary = salary
        .into_iter()
        .take(TOP_LOCATIONS)
        .map(|(loc, mean)| (loc, mean.trunc() as u64))
        .collect_vec();
    share.truncate(TOP_LOCATIONS);
    (salary, share)
}
