use perf_bench::*;

fn main() {
    // x and y are separate contiguous buffers, reduced with bulk operations.
    let run = run_layout::<PairSoA>(NUM_PAIRS, PROFILE_SEED);
    print_report(&run);
}
