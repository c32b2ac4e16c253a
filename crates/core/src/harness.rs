use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use super::dataset;
use super::traits::Layout;
use common::{
    error::Error,
    stats,
    types::{SizeResult, TrialResult},
};

/// Trials per size when none is configured.
pub const DEFAULT_RUNS: usize = 5;

/// Sizes measured by a default run.
pub const DEFAULT_SIZES: [usize; 4] = [100_000, 200_000, 400_000, 800_000];

/// Times one call of `L::sum` on `data` with a monotonic clock.
///
/// The checksum is routed through `black_box` so the call cannot be elided.
pub fn time_sum<L: Layout>(data: &L) -> (f64, Duration) {
    let start = Instant::now();
    let checksum = L::sum(black_box(data));
    let elapsed = start.elapsed();
    (black_box(checksum), elapsed)
}

/// Sequential micro-benchmark driver comparing the AoS and SoA kernels.
///
/// Every trial draws fresh datasets from the owned generator, so no trial
/// sees memory already warmed by a previous one. Datasets are dropped at the
/// end of the trial that created them.
pub struct Harness<R> {
    rng: R,
    runs: usize,
}

impl<R> Harness<R>
where
    R: Rng,
{
    /// Creates a harness performing `runs` trials per size.
    ///
    /// # Errors
    /// Returns `Error::ZeroTrials` if `runs` is 0.
    pub fn new(rng: R, runs: usize) -> Result<Self, Error> {
        if runs == 0 {
            return Err(Error::ZeroTrials);
        }
        Ok(Harness { rng, runs })
    }

    /// Runs one trial at size `n`: generate both layouts, then time each kernel once.
    pub fn bench_once(&mut self, n: usize) -> TrialResult {
        let (aos, soa) = dataset::generate_datasets(&mut self.rng, n);

        let (aos_sum, aos) = time_sum(&aos);
        let (soa_sum, soa) = time_sum(&soa);

        debug!(
            "Trial n={}: AoS {:?} (sum {:.6}), SoA {:?} (sum {:.6})",
            n, aos, aos_sum, soa, soa_sum
        );

        TrialResult { aos, soa }
    }

    /// Runs every trial for a single size and aggregates the means.
    pub fn bench_size(&mut self, n: usize) -> Result<SizeResult, Error> {
        let mut aos_times = Vec::with_capacity(self.runs);
        let mut soa_times = Vec::with_capacity(self.runs);

        for _ in 0..self.runs {
            let trial = self.bench_once(n);
            aos_times.push(trial.aos);
            soa_times.push(trial.soa);
        }

        Ok(SizeResult {
            n,
            aos_mean: stats::mean_secs(&aos_times)?,
            soa_mean: stats::mean_secs(&soa_times)?,
        })
    }

    /// Benchmarks every size in order and returns one result per size.
    ///
    /// A failure at any size aborts the run; results gathered so far are dropped.
    pub fn benchmark(&mut self, sizes: &[usize]) -> Result<Vec<SizeResult>, Error> {
        let mut results = Vec::with_capacity(sizes.len());

        for &n in sizes {
            let result = self.bench_size(n)?;
            info!(
                "Benchmarked n={} over {} runs: AoS {:.6}s, SoA {:.6}s",
                n, self.runs, result.aos_mean, result.soa_mean
            );
            results.push(result);
        }

        Ok(results)
    }
}
