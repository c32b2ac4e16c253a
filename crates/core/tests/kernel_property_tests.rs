use layout_bench_core::dataset::{Pair, PairAoS, PairSoA, generate_datasets};
use layout_bench_core::kernels::{aos_sum, soa_sum};
use layout_bench_core::{Harness, Layout};
use proptest::prelude::*;
use proptest::strategy::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const MAX_PAIRS: usize = 2_000;

fn pairs_strategy() -> impl Strategy<Value = PairAoS> {
    prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..MAX_PAIRS)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Pair { x, y }).collect())
}

fn assert_close(a: f64, b: f64) -> Result<(), TestCaseError> {
    let scale = a.abs().max(b.abs()).max(1.0);
    prop_assert!(
        (a - b).abs() <= 1e-9 * scale,
        "{} and {} differ by more than the tolerance",
        a,
        b
    );
    Ok(())
}

proptest! {
    /// Property: both kernels compute the same sum over the same values
    #[test]
    fn kernels_agree_on_same_values(aos in pairs_strategy()) {
        let soa: PairSoA = aos.clone().into();
        assert_close(aos_sum(&aos), soa_sum(&soa.x, &soa.y))?;
    }

    /// Property: repeated kernel calls return bit-identical results
    #[test]
    fn kernels_are_deterministic(aos in pairs_strategy()) {
        let soa: PairSoA = aos.clone().into();
        prop_assert_eq!(aos_sum(&aos).to_bits(), aos_sum(&aos).to_bits());
        prop_assert_eq!(soa_sum(&soa.x, &soa.y).to_bits(), soa_sum(&soa.x, &soa.y).to_bits());
    }

    /// Property: generated datasets have the requested size and agree once converted
    #[test]
    fn generated_data_agrees_across_layouts(seed in any::<u64>(), n in 0usize..MAX_PAIRS) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (aos, soa) = generate_datasets(&mut rng, n);
        prop_assert_eq!(aos.pair_count(), n);
        prop_assert_eq!(soa.pair_count(), n);

        let converted: PairAoS = soa.clone().into();
        assert_close(converted.sum(), soa.sum())?;
    }

    /// Property: the harness reports exactly the requested sizes, in order
    #[test]
    fn harness_reports_each_size_once(
        sizes in prop::collection::vec(0usize..256, 0..6),
        runs in 1usize..4,
    ) {
        let mut harness = Harness::new(SmallRng::seed_from_u64(5), runs).unwrap();
        let results = harness.benchmark(&sizes).unwrap();

        let reported: Vec<usize> = results.iter().map(|r| r.n).collect();
        prop_assert_eq!(reported, sizes);
        for r in &results {
            prop_assert!(r.aos_mean >= 0.0);
            prop_assert!(r.soa_mean >= 0.0);
        }
    }
}

#[test]
fn empty_input_sums_to_zero() {
    let empty = PairSoA::default();
    assert_eq!(Vec::<Pair>::new().sum(), 0.0);
    assert_eq!(empty.sum(), 0.0);
}
