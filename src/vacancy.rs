//! One vacancy, as read from the input table.

use crate::errors::{self, Result};
use crate::salary::SalaryRange;
use serde::{Deserialize, Serialize};

pub type Year = u16;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VacancyRecord {
    pub name: String,
    pub salary: SalaryRange,
    pub location: String,
    pub year: Year,
}

/// The year is the first four characters of a timestamp such as `2022-05-31T17:32:31+0300`.
pub fn parse_year(published_at: &str) -> Result<Year> {
    published_at
        .get(..4)
        .and_then(|y| y.parse().ok())
        .ok_or_else(|| errors::invalid_input(format!("cannot read year from '{published_at}'")))
}

impl VacancyRecord {
    pub fn new(name: &str, salary: SalaryRange, location: &str, year: Year) -> VacancyRecord {
        VacancyRecord {
            name: name.to_owned(),
            salary,
            location: location.to_owned(),
            year,
        }
    }

    /// Builds a record from the raw text fields of one input row.
    pub fn parse(
        name: &str,
        salary_from: &str,
        salary_to: &str,
        currency: &str,
        location: &str,
        published_at: &str,
    ) -> Result<VacancyRecord> {
        let salary = SalaryRange::parse(salary_from, salary_to, currency)?;
        let year = parse_year(published_at)?;
        Ok(VacancyRecord::new(name, salary, location, year))
    }

    pub fn matches_title(&self, title_filter: &str) -> bool {
        self.name.contains(title_filter)
    }
}
