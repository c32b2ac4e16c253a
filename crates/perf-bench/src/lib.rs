use std::time::Duration;

use layout_bench_core::Layout;
use layout_bench_core::harness::time_sum;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub use layout_bench_core::{PairAoS, PairSoA};

/// Pairs summed by a single profiling run, matching the largest default size.
pub const NUM_PAIRS: usize = 800_000;

/// Fixed seed so repeated profiling runs touch identical data.
pub const PROFILE_SEED: u64 = 0x5EED;

/// Outcome of one isolated kernel run.
pub struct LayoutRun {
    pub name: &'static str,
    pub pairs: usize,
    pub checksum: f64,
    pub elapsed: Duration,
}

/// Generates one seeded dataset in layout `L` and times a single sum over it.
///
/// Intended to be run under an external profiler, so only one layout is ever
/// resident in the process.
pub fn run_layout<L: Layout>(n: usize, seed: u64) -> LayoutRun {
    let mut rng = SmallRng::seed_from_u64(seed);
    let data = L::generate(&mut rng, n);
    let (checksum, elapsed) = time_sum(&data);

    LayoutRun {
        name: L::NAME,
        pairs: data.pair_count(),
        checksum,
        elapsed,
    }
}

pub fn print_report(run: &LayoutRun) {
    println!("--- {} Benchmark Results ({} Pairs) ---", run.name, run.pairs);
    println!("Checksum: {:.10}", run.checksum);
    println!("Elapsed Time: {:?}", run.elapsed);
}
