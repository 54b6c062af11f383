pub use num_integer::{Integer, Roots};
use num_traits::{CheckedMul, FromPrimitive, NumRef, RefNum, ToPrimitive};
use std::fmt;

use crate::error::Error;

/// The verdict of the classifier, mutually exclusive by construction.
///
/// A `Composite` verdict is always exact (Fermat's identity is a necessary
/// condition for primality), `Carmichael` is exact (exhaustively verified),
/// while `Prime` is probabilistic with the error bound given by
/// [`confidence()`][crate::confidence].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Classification {
    Prime,
    Composite,
    Carmichael,
}

impl Classification {
    /// The lowercase tag callers render: `"prime"`, `"composite"` or
    /// `"carmichael"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Prime => "prime",
            Classification::Composite => "composite",
            Classification::Carmichael => "carmichael",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fermat-side primality utilities, implemented for every integer type
/// meeting [`ClassifyBase`].
pub trait FermatUtils {
    /// Test if the integer is a (Fermat) probable prime to the given base,
    /// i.e. whether base^(n-1) = 1 mod n. Targets below 2 are never probable
    /// primes. Composite targets may still pass for unlucky bases; that blind
    /// spot is what [`is_carmichael`][FermatUtils::is_carmichael] closes.
    fn is_fermat_prp(&self, base: Self) -> Result<bool, Error>
    where
        Self: Sized;

    /// Exhaustively test if the integer is a Carmichael number: odd,
    /// composite, and a Fermat probable prime to every coprime base.
    /// Exact, but scans every candidate divisor below the target, so it is
    /// only tractable for modest targets.
    fn is_carmichael(&self) -> Result<bool, Error>;
}

/// A source of Fermat witnesses.
///
/// [`RandomWitness`][crate::RandomWitness] adapts any [`rand::Rng`], so
/// `thread_rng()` works out of the box and a seeded generator gives
/// reproducible classification runs. Test harnesses can script exact witness
/// sequences with their own impl.
pub trait WitnessSource<T> {
    /// Draw a witness uniformly from [1, modulus - 1].
    ///
    /// The caller must supply a modulus of at least 2.
    fn draw_witness(&mut self, modulus: &T) -> T;
}

/// This trait describes the requirements on the integer type for it to be
/// classified. `u64`, `u128` and `num_bigint::BigUint` all qualify.
/// `CheckedMul` is what lets intermediate overflow on fixed-width types
/// surface as [`Error::PrecisionLoss`] instead of wrapping.
pub trait ClassifyBase:
    Integer + Roots + NumRef + Clone + FromPrimitive + ToPrimitive + CheckedMul + fmt::Display
{
}
impl<T: Integer + Roots + NumRef + Clone + FromPrimitive + ToPrimitive + CheckedMul + fmt::Display>
    ClassifyBase for T
{
}
/// The counterpart of [`ClassifyBase`] for references of the integer type,
/// so that generic code can take arithmetic by reference instead of cloning.
pub trait ClassifyRefBase<Base>: RefNum<Base> {}
impl<T, Base> ClassifyRefBase<Base> for T where T: RefNum<Base> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_tags() {
        assert_eq!(Classification::Prime.as_str(), "prime");
        assert_eq!(Classification::Composite.as_str(), "composite");
        assert_eq!(Classification::Carmichael.to_string(), "carmichael");
        assert_ne!(Classification::Prime, Classification::Carmichael);
    }
}
