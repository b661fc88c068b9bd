//! Running means that never keep the values they have seen.

use serde::{Deserialize, Serialize};

/// Mean of `count + 1` values, given the mean of the first `count` and the next value.
pub fn update(mean: f64, value: f64, count: u64) -> f64 {
    let n = count as f64;
    (mean * n + value) / (n + 1.0)
}

/// Mean and number of values fed so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RunningMean {
    pub mean: f64,
    pub count: u64,
}

impl RunningMean {
    pub fn new() -> RunningMean {
        RunningMean::default()
    }

    pub fn feed(&mut self, value: f64) {
        self.mean = update(self.mean, value, self.count);
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
