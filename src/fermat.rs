//! Fermat probable-prime and Carmichael checks for generic integers.
//!
//! Everything here is deterministic. The probabilistic part of the crate
//! (witness sampling and repetition) lives behind [`classify`][crate::classify];
//! this module only answers exact questions about a single base or about the
//! Carmichael property itself.

use crate::arith::{gcd, mod_exp};
use crate::error::Error;
use crate::traits::{ClassifyBase, ClassifyRefBase, FermatUtils, Roots};

impl<T: ClassifyBase> FermatUtils for T
where
    for<'r> &'r T: ClassifyRefBase<T>,
{
    fn is_fermat_prp(&self, base: Self) -> Result<bool, Error> {
        let two = Self::one() + Self::one();
        if self < &two {
            return Ok(false);
        }
        Ok(mod_exp(&base, &(self - Self::one()), self)?.is_one())
    }

    fn is_carmichael(&self) -> Result<bool, Error> {
        // Carmichael numbers are odd, so this also disposes of 0 and 2
        if self.is_even() {
            return Ok(false);
        }
        if self.is_one() {
            return Ok(false);
        }

        let root = Roots::sqrt(self);
        let nm1 = self - Self::one();
        let mut factor_found = false;
        let mut a = Self::one() + Self::one();
        while &a < self {
            // a clean scan past the square root means the target is prime
            if a > root && !factor_found {
                return Ok(false);
            }
            if gcd(&a, self) > Self::one() {
                factor_found = true;
            } else if !mod_exp(&a, &nm1, self)?.is_one() {
                return Ok(false);
            }
            a = a + Self::one();
        }
        Ok(true)
    }
}
