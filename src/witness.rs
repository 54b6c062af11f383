//! Witness sampling on top of the [`rand`] crate.

use num_traits::One;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::Rng;

use crate::traits::WitnessSource;

/// Adapts any random number generator into a [`WitnessSource`].
///
/// Draws are uniform over [1, modulus - 1]; the [`Uniform`] range excludes
/// its upper bound, which is exactly the interval the Fermat test wants.
pub struct RandomWitness<R>(pub R);

impl<T, R> WitnessSource<T> for RandomWitness<R>
where
    T: One + SampleUniform,
    R: Rng,
{
    fn draw_witness(&mut self, modulus: &T) -> T {
        self.0.sample(Uniform::new(T::one(), modulus))
    }
}
