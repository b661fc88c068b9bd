//! Salary ranges and their normalization into the reference currency.

use crate::currency;
use crate::errors::{self, Result};
use serde::{Deserialize, Serialize};

pub type Salary = u64;

/// A salary range in some currency.
///
/// Both bounds are whole, non-negative amounts in the original currency.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SalaryRange {
    pub min_salary: Salary,
    pub max_salary: Salary,
    pub currency: String,
}

/// Parses a possibly fractional salary bound, truncating toward zero.
///
/// Non-numeric, non-finite, negative or out-of-range values are rejected.
pub fn parse_salary(raw: &str) -> Result<Salary> {
    let x: f64 = raw
        .trim()
        .parse()
        .map_err(|_| errors::malformed_salary(raw))?;
    if !x.is_finite() {
        return Err(errors::malformed_salary(raw));
    }
    let x = x.trunc();
    // 2^64 is exactly representable, so this rejects everything a u64 cannot hold.
    if x < 0.0 || x >= 18_446_744_073_709_551_616.0 {
        return Err(errors::malformed_salary(raw));
    }
    Ok(x as Salary)
}

impl SalaryRange {
    pub fn new(min_salary: Salary, max_salary: Salary, currency: &str) -> SalaryRange {
        SalaryRange {
            min_salary,
            max_salary,
            currency: currency.to_owned(),
        }
    }

    /// Builds a range from raw text fields, e.g. `"30000.0"`, `"80000"`, `"RUR"`.
    pub fn parse(min_salary: &str, max_salary: &str, currency: &str) -> Result<SalaryRange> {
        Ok(SalaryRange::new(
            parse_salary(min_salary)?,
            parse_salary(max_salary)?,
            currency,
        ))
    }

    /// Midpoint of the range, converted into the reference currency.
    ///
    /// No rounding happens here.
    pub fn reference_value(&self) -> Result<f64> {
        let rate = currency::rate(&self.currency)?;
        Ok((self.min_salary as f64 + self.max_salary as f64) / 2.0 * rate)
    }
}
