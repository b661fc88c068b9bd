//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A salary bound that is not a usable number.
#[derive(Debug)]
pub struct MalformedSalary(pub String);

/// A currency code missing from the conversion table.
#[derive(Debug)]
pub struct UnknownCurrency(pub String);

/// An operation that is not allowed in the current state of the engine.
#[derive(Debug)]
pub struct InvalidState(pub String);

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

impl fmt::Display for MalformedSalary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed salary: '{}'", self.0)
    }
}

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown currency: '{}'", self.0)
    }
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid state: {}", self.0)
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl error::Error for MalformedSalary {}

impl error::Error for UnknownCurrency {}

impl error::Error for InvalidState {}

impl error::Error for InvalidInput {}

/// A helper for constructing [MalformedSalary].
pub fn malformed_salary(s: &str) -> Box<dyn error::Error> {
    MalformedSalary(s.to_owned()).into()
}

/// A helper for constructing [UnknownCurrency].
pub fn unknown_currency(s: &str) -> Box<dyn error::Error> {
    UnknownCurrency(s.to_owned()).into()
}

/// A helper for constructing [InvalidState].
pub fn invalid_state_ref(s: &str) -> Box<dyn error::Error> {
    InvalidState(s.to_owned()).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}
