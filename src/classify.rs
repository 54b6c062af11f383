//! Standalone classification functions.
//!
//! These free functions are the front door of the crate. [`classify`] draws
//! witnesses from [`rand::thread_rng`], [`classify_with`] accepts any
//! [`WitnessSource`] for seeded or scripted runs, and [`classify64`] is the
//! convenience entry for machine integers. It widens to `u128` internally,
//! so it never reports precision loss.

use log::debug;
use rand::distributions::uniform::SampleUniform;

use crate::arith::mod_exp;
use crate::error::Error;
use crate::traits::{Classification, ClassifyBase, ClassifyRefBase, FermatUtils, WitnessSource};
use crate::witness::RandomWitness;

/// Classify the target with `trials` rounds of the Fermat test, drawing
/// witnesses from the given source.
///
/// The target is first screened for the Carmichael property, which is exact,
/// then each round draws one witness from [1, target - 1] and checks Fermat's
/// identity. A single failing witness certifies `Composite`; surviving every
/// round yields `Prime` with confidence [`confidence(trials)`][confidence].
///
/// Targets below 1 and a zero trial count are rejected as invalid arguments.
/// The target 1 is reported `Composite`: it is not prime, and its witness
/// interval is empty.
pub fn classify_with<T, S>(
    target: &T,
    trials: usize,
    witnesses: &mut S,
) -> Result<Classification, Error>
where
    T: ClassifyBase,
    for<'r> &'r T: ClassifyRefBase<T>,
    S: WitnessSource<T> + ?Sized,
{
    if target < &T::one() {
        return Err(Error::InvalidArgument("target must be positive"));
    }
    if trials == 0 {
        return Err(Error::InvalidArgument("trial count must be positive"));
    }
    if target.is_one() {
        return Ok(Classification::Composite);
    }

    if target.is_carmichael()? {
        debug!("{} is an absolute Fermat pseudoprime", target);
        return Ok(Classification::Carmichael);
    }

    let nm1 = target - T::one();
    for _ in 0..trials {
        let w = witnesses.draw_witness(target);
        if !mod_exp(&w, &nm1, target)?.is_one() {
            debug!("witness {} certifies {} composite", w, target);
            return Ok(Classification::Composite);
        }
    }
    Ok(Classification::Prime)
}

/// Classify the target with `trials` rounds of the Fermat test, with
/// witnesses from [`rand::thread_rng`].
///
/// # Examples
/// ```
/// use num_fermat::{classify, Classification};
///
/// assert_eq!(classify(&97u64, 10), Ok(Classification::Prime));
/// assert_eq!(classify(&561u64, 10), Ok(Classification::Carmichael));
/// ```
pub fn classify<T>(target: &T, trials: usize) -> Result<Classification, Error>
where
    T: ClassifyBase + SampleUniform,
    for<'r> &'r T: ClassifyRefBase<T>,
{
    classify_with(target, trials, &mut RandomWitness(rand::thread_rng()))
}

/// Classify a `u64` target with `trials` rounds of the Fermat test.
///
/// The arithmetic runs in `u128`, so no 64-bit target can fail with
/// [`Error::PrecisionLoss`].
///
/// # Examples
/// ```
/// use num_fermat::{classify64, Classification};
///
/// assert_eq!(classify64(6601, 5), Ok(Classification::Carmichael));
/// assert_eq!(classify64(6603, 5), Ok(Classification::Composite));
/// ```
pub fn classify64(target: u64, trials: usize) -> Result<Classification, Error> {
    classify(&u128::from(target), trials)
}

/// Test if the target is a Carmichael number. See
/// [`FermatUtils::is_carmichael`] for the exact semantics.
pub fn is_carmichael<T>(target: &T) -> Result<bool, Error>
where
    T: ClassifyBase,
    for<'r> &'r T: ClassifyRefBase<T>,
{
    FermatUtils::is_carmichael(target)
}

/// The probability, as a percentage, that a `Prime` verdict after `trials`
/// rounds is correct: 100 * (1 - 2^-trials).
///
/// Fermat liars form a proper subgroup of the multiplicative group of any
/// composite that is not a Carmichael number, so each round passes with
/// probability at most 1/2. Note that from 54 trials on the value is no
/// longer distinguishable from 100.0 in an `f64`.
pub fn confidence(trials: usize) -> Result<f64, Error> {
    if trials == 0 {
        return Err(Error::InvalidArgument("trial count must be positive"));
    }
    // 0.5^k underflows to exactly 0.0 past the subnormal floor at k = 1074;
    // the clamp also keeps the cast within i32 range
    let k = trials.min(1074) as i32;
    Ok((1.0 - 0.5f64.powi(k)) * 100.0)
}
