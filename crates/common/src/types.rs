use serde::Serialize;
use std::time::Duration;

/// Elapsed times of one AoS and one SoA kernel call on freshly generated data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    pub aos: Duration,
    pub soa: Duration,
}

/// Mean timing of both kernels for one input size.
///
/// Fields:
/// - `n`: number of pairs summed in each trial.
/// - `aos_mean`: mean AoS kernel time across all trials, in seconds.
/// - `soa_mean`: mean SoA kernel time across all trials, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeResult {
    pub n: usize,
    pub aos_mean: f64,
    pub soa_mean: f64,
}

impl SizeResult {
    /// Returns how many times slower the AoS kernel was than the SoA kernel.
    ///
    /// Follows IEEE-754 division: a zero `soa_mean` yields `inf`, or `NaN`
    /// when both means are zero. Callers print the value as-is.
    pub fn speedup(&self) -> f64 {
        self.aos_mean / self.soa_mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speedup_ratio() {
        let result = SizeResult {
            n: 10,
            aos_mean: 0.3,
            soa_mean: 0.1,
        };
        assert!((result.speedup() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_speedup_with_zero_soa_mean_is_infinite() {
        let result = SizeResult {
            n: 0,
            aos_mean: 0.5,
            soa_mean: 0.0,
        };
        assert!(result.speedup().is_infinite());
    }

    #[test]
    fn test_speedup_with_both_means_zero_is_nan() {
        let result = SizeResult {
            n: 0,
            aos_mean: 0.0,
            soa_mean: 0.0,
        };
        assert!(result.speedup().is_nan());
    }
}
