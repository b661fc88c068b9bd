//! Main entry point for calculating everything.

use crate::buckets::{LocationTotals, YearRange};
use crate::currency::REFERENCE_CURRENCY;
use crate::engine::AggregationEngine;
use crate::errors::Result;
use crate::input::{self, Ingested};
use crate::output::{self, Statistics};
use crate::vacancy::VacancyRecord;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// What to calculate?
pub struct DriverArgs<'a> {
    /// Job title filter.
    /// Records whose name contains this as a substring (case-sensitive) also go to the filtered statistics.
    /// The empty string matches every record.
    pub title_filter: &'a str,

    /// Years with per-year statistics.
    /// Records from other years are still used for the per-location statistics.
    pub years: YearRange,
}

/// Reads vacancies from a CSV file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<VacancyRecord>> {
    let path = path.as_ref();
    info!(target: "vacstats", "read: {}", path.display());
    let file = File::open(path)?;
    let Ingested { records, skipped } = input::read_vacancies(BufReader::new(file))?;
    info!(target: "vacstats", "records: {}, skipped rows: {}", records.len(), skipped);
    Ok(records)
}

fn statistics(records: &[VacancyRecord], args: &DriverArgs) {
    let totals = LocationTotals::count(records.iter().map(|r| r.location.as_str()));
    let outside = records
        .iter()
        .filter(|r| !args.years.contains(r.year))
        .count();
    let matching = records
        .iter()
        .filter(|r| r.matches_title(args.title_filter))
        .count();
    info!(
        target: "vacstats",
        "title filter: '{}', matching records: {}",
        args.title_filter, matching
    );
    info!(
        target: "vacstats",
        "years {}-{}, records outside: {}",
        args.years.first, args.years.last, outside
    );
    info!(
        target: "vacstats",
        "locations: {}, reported if at least {} records: {}",
        totals.locations(),
        totals.threshold(),
        totals.included().count()
    );
}

/// Calculate everything.
///
/// This is the main entry point for the library.
pub fn calc(args: &DriverArgs, records: &[VacancyRecord]) -> Result<Statistics> {
    statistics(records, args);
    let mut engine = AggregationEngine::new(args.years);
    for record in records {
        engine.ingest(record, args.title_filter)?;
    }
    let stats = engine.finalize();
    info!(
        target: "vacstats",
        "salary by year ({REFERENCE_CURRENCY}): {}",
        output::pretty_years(&stats.year_salary)
    );
    info!(target: "vacstats", "vacancies by year: {}", output::pretty_years(&stats.year_count));
    info!(
        target: "vacstats",
        "salary by year, filtered: {}",
        output::pretty_years(&stats.year_salary_filtered)
    );
    info!(
        target: "vacstats",
        "vacancies by year, filtered: {}",
        output::pretty_years(&stats.year_count_filtered)
    );
    info!(
        target: "vacstats",
        "salary by city: {}",
        output::pretty_locations(&stats.location_salary)
    );
    info!(
        target: "vacstats",
        "share of vacancies by city: {}",
        output::pretty_locations(&stats.location_share)
    );
    debug!(
        target: "vacstats",
        "top cities: {} by salary, {} by share",
        stats.location_salary.len(),
        stats.location_share.len()
    );
    Ok(stats)
}
