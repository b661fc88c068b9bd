//! Conversion rates to the reference currency (RUR).

use crate::errors::{self, Result};

/// Currency code and how many reference-currency units one unit is worth.
const RATES: [(&str, f64); 10] = [
    ("AZN", 35.68),
    ("BYR", 23.91),
    ("EUR", 59.90),
    ("GEL", 21.74),
    ("KGS", 0.76),
    ("KZT", 0.13),
    ("RUR", 1.0),
    ("UAH", 1.64),
    ("USD", 60.66),
    ("UZS", 0.0055),
];

/// The currency everything is normalized into.
pub const REFERENCE_CURRENCY: &str = "RUR";

/// Conversion rate for `code`; unknown codes are an error, never a default.
pub fn rate(code: &str) -> Result<f64> {
    RATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, r)| r)
        .ok_or_else(|| errors::unknown_currency(code))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::UnknownCurrency;

    #[test]
    fn reference_rate_is_one() {
        assert_eq!(rate(REFERENCE_CURRENCY).unwrap(), 1.0);
    }

    #[test]
    fn known_rates() {
        assert_eq!(rate("KZT").unwrap(), 0.13);
        assert_eq!(rate("USD").unwrap(), 60.66);
        assert_eq!(rate("UZS").unwrap(), 0.0055);
    }

    #[test]
    fn unknown_code() {
        let e = rate("GBP").unwrap_err();
        assert!(e.downcast_ref::<UnknownCurrency>().is_some());
        assert!(rate("rur").is_err());
        assert!(rate("").is_err());
    }
}
