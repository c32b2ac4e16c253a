use rand::Rng;

use super::dataset::{self, PairAoS, PairSoA};
use super::kernels;

/// A memory layout for a dataset of `(x, y)` pairs that the harness can build and sum.
///
/// The harness times [`Layout::sum`] only; [`Layout::generate`] runs outside
/// the measured region.
pub trait Layout: Sized {
    /// Short label used in logs and reports.
    const NAME: &'static str;

    /// Builds a dataset of `n` pairs with values drawn from `[0, 1)`.
    fn generate<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self;

    /// Number of pairs held.
    fn pair_count(&self) -> usize;

    /// Sum over all pairs of `x + y`.
    fn sum(&self) -> f64;
}

impl Layout for PairAoS {
    const NAME: &'static str = "AoS";

    fn generate<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        dataset::generate_aos(rng, n)
    }

    fn pair_count(&self) -> usize {
        self.len()
    }

    fn sum(&self) -> f64 {
        kernels::aos_sum(self)
    }
}

impl Layout for PairSoA {
    const NAME: &'static str = "SoA";

    fn generate<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        dataset::generate_soa(rng, n)
    }

    fn pair_count(&self) -> usize {
        self.len()
    }

    fn sum(&self) -> f64 {
        kernels::soa_sum(&self.x, &self.y)
    }
}
