use rand::rngs::OsRng;
use rand::seq::index;
use rand::Rng;

/// Randomness consumed while assembling a password.
pub trait RandomSource {
    /// Uniform integer in `0..=max`.
    fn int_inclusive(&mut self, max: usize) -> usize;

    /// `amount` distinct indices from `0..len`, without replacement.
    fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize>;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        match items.len() {
            0 => None,
            len => items.get(self.int_inclusive(len - 1)),
        }
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl RngSource<OsRng> {
    /// Operating system entropy, used outside of tests.
    pub fn os() -> Self {
        RngSource(OsRng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_inclusive(&mut self, max: usize) -> usize {
        self.0.gen_range(0..=max)
    }

    fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}
