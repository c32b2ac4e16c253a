use perf_bench::*;

fn main() {
    // Each pair's x and y share a cache line; the kernel walks pair by pair.
    let run = run_layout::<PairAoS>(NUM_PAIRS, PROFILE_SEED);
    print_report(&run);
}
