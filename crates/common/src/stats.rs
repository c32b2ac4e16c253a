use std::time::Duration;

use super::error::Error;

/// Arithmetic mean of a set of elapsed times, in seconds.
///
/// Every duration is converted with `Duration::as_secs_f64` before summing so
/// sub-nanosecond rounding does not accumulate across trials.
pub fn mean_secs(samples: &[Duration]) -> Result<f64, Error> {
    if samples.is_empty() {
        return Err(Error::EmptySample);
    }

    let total: f64 = samples.iter().map(Duration::as_secs_f64).sum();
    Ok(total / samples.len() as f64)
}
