pub mod dataset;
pub mod harness;
pub mod kernels;
pub mod traits;

pub use dataset::{Pair, PairAoS, PairSoA};
pub use harness::Harness;
pub use traits::Layout;
