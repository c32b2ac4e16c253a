use super::dataset::Pair;

/// Number of independent accumulators used by the SoA reduction.
///
/// Eight `f64` lanes fill one AVX-512 register or two AVX2 registers.
pub const REDUCE_LANES: usize = 8;

/// Sums `x + y` over every pair, one pair at a time.
///
/// The single running accumulator forms a serial dependency chain, which is the
/// access pattern the AoS side of the benchmark is meant to model.
pub fn aos_sum(data: &[Pair]) -> f64 {
    let mut total = 0.0;
    for pair in data {
        total += pair.x + pair.y;
    }
    total
}

/// Sums `x[i] + y[i]` over two parallel buffers using bulk operations.
///
/// The elementwise add writes into a fresh contiguous buffer, then
/// [`lane_sum`] reduces it. Both passes are straight-line loops over
/// contiguous `f64`s that the compiler can vectorize.
pub fn soa_sum(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len(), "SoA buffers must have equal length");
    let added = elementwise_add(x, y);
    lane_sum(&added)
}

/// Returns `x + y` as a new buffer.
pub fn elementwise_add(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(a, b)| a + b).collect()
}

/// Reduces a contiguous buffer with [`REDUCE_LANES`] independent partial sums.
pub fn lane_sum(values: &[f64]) -> f64 {
    let mut lanes = [0.0f64; REDUCE_LANES];
    let chunks = values.chunks_exact(REDUCE_LANES);
    let tail = chunks.remainder();

    for chunk in chunks {
        for (lane, v) in lanes.iter_mut().zip(chunk) {
            *lane += *v;
        }
    }

    // Pairwise fold of the lanes keeps the final combine balanced.
    let mut width = REDUCE_LANES;
    while width > 1 {
        width /= 2;
        for i in 0..width {
            lanes[i] += lanes[i + width];
        }
    }

    lanes[0] + tail.iter().sum::<f64>()
}
