mod arith;
mod classify;
mod error;
mod fermat;
mod traits;
mod witness;

pub use arith::{gcd, mod_exp};
pub use classify::{classify, classify64, classify_with, confidence, is_carmichael};
pub use error::Error;
pub use traits::{Classification, FermatUtils, WitnessSource};
pub use witness::RandomWitness;

pub mod detail {
    pub use super::traits::{ClassifyBase, ClassifyRefBase};
}
