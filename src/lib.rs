pub mod buckets;
pub mod currency;
pub mod driver;
pub mod engine;
pub mod errors;
pub mod input;
pub mod mean;
pub mod output;
pub mod report;
pub mod salary;
pub mod vacancy;
