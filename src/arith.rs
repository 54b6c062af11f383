//! Implementations of the arithmetic primitives behind the classifier.
//!
//! Both functions are the textbook recursive formulations: exponentiation by
//! halving the exponent, and the Euclidean algorithm. Recursion depth is
//! logarithmic in the inputs, so stack use stays bounded even for bigints.
//!
//! See <https://en.wikipedia.org/wiki/Modular_exponentiation> and
//! <https://en.wikipedia.org/wiki/Euclidean_algorithm>

use crate::error::Error;
use crate::traits::{ClassifyBase, ClassifyRefBase};

/// Compute base^exp mod modulus by recursive halving of the exponent.
///
/// A zero exponent yields 1 for every base and every nonzero modulus, by the
/// empty-product convention. This includes modulus 1, where any positive
/// exponent correctly yields 0. A zero modulus is rejected with
/// [`Error::ZeroModulus`].
///
/// All intermediate products are checked: on a fixed-width integer type whose
/// square of a residue cannot be represented, the call fails with
/// [`Error::PrecisionLoss`] instead of wrapping around. In practice a `u64`
/// modulus must stay below 2^32; use `u128` or a bigint beyond that.
/// Behaviour is specified for non-negative inputs.
pub fn mod_exp<T: ClassifyBase>(base: &T, exp: &T, modulus: &T) -> Result<T, Error>
where
    for<'r> &'r T: ClassifyRefBase<T>,
{
    if modulus.is_zero() {
        return Err(Error::ZeroModulus);
    }
    if exp.is_zero() {
        return Ok(T::one());
    }

    let two = T::one() + T::one();
    let z = mod_exp(base, &(exp / &two), modulus)?;
    let zz = z.checked_mul(&z).ok_or(Error::PrecisionLoss)? % modulus;
    if exp.is_even() {
        Ok(zz)
    } else {
        let b = base % modulus;
        Ok(b.checked_mul(&zz).ok_or(Error::PrecisionLoss)? % modulus)
    }
}

/// Compute the greatest common divisor by the recursive Euclidean algorithm.
///
/// Operands are swapped first when a < b, and gcd(a, 0) = a by convention, so
/// the function is total. Each pair of steps at least halves the smaller
/// operand, giving O(log min(a, b)) recursion depth.
pub fn gcd<T: ClassifyBase>(a: &T, b: &T) -> T
where
    for<'r> &'r T: ClassifyRefBase<T>,
{
    if b.is_zero() {
        return a.clone();
    }
    if a < b {
        return gcd(b, a);
    }
    let r = a % b;
    if r.is_zero() {
        b.clone()
    } else {
        gcd(b, &r)
    }
}
