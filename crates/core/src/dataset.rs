use rand::Rng;

/// Array of Structs (AoS) element - both fields of a pair are contiguous.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub x: f64,
    pub y: f64,
}

pub type PairAoS = Vec<Pair>;

/// Struct of Arrays (SoA) - each field lives in its own contiguous buffer.
///
/// `x` and `y` always have the same length when built by this module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairSoA {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PairSoA {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl From<PairAoS> for PairSoA {
    fn from(aos: PairAoS) -> Self {
        let mut x = Vec::with_capacity(aos.len());
        let mut y = Vec::with_capacity(aos.len());
        for pair in aos {
            x.push(pair.x);
            y.push(pair.y);
        }
        PairSoA { x, y }
    }
}

impl From<PairSoA> for PairAoS {
    fn from(soa: PairSoA) -> Self {
        soa.x
            .into_iter()
            .zip(soa.y)
            .map(|(x, y)| Pair { x, y })
            .collect()
    }
}

/// Generates `n` pairs with both fields drawn independently from `[0, 1)`.
pub fn generate_aos<R: Rng + ?Sized>(rng: &mut R, n: usize) -> PairAoS {
    (0..n)
        .map(|_| Pair {
            x: rng.random::<f64>(),
            y: rng.random::<f64>(),
        })
        .collect()
}

/// Generates two independent length-`n` sequences drawn from `[0, 1)`.
pub fn generate_soa<R: Rng + ?Sized>(rng: &mut R, n: usize) -> PairSoA {
    let x = (0..n).map(|_| rng.random::<f64>()).collect();
    let y = (0..n).map(|_| rng.random::<f64>()).collect();
    PairSoA { x, y }
}

/// Produces the datasets for one trial. The two layouts hold unrelated draws.
pub fn generate_datasets<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (PairAoS, PairSoA) {
    let aos = generate_aos(rng, n);
    let soa = generate_soa(rng, n);
    (aos, soa)
}
