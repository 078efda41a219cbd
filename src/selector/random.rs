//! Sources of uniform random numbers in `[0, 1)`

use rand::Rng;

/// Produces uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..n`
    ///
    /// Computed as `floor(next_unit() * n)`, clamped to `n - 1`.
    ///
    /// # Panics
    /// Panics in debug mode if `n == 0`
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "cannot draw from an empty range");
        let drawn = (self.next_unit() * n as f64).floor() as usize;
        drawn.min(n.saturating_sub(1))
    }
}

/// The thread-local generator from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays a fixed sequence of values, wrapping around at the end
///
/// # Examples
/// ```
/// use wordham::selector::{RandomSource, SequenceRandom};
///
/// let mut random = SequenceRandom::new(vec![0.0, 0.5]);
/// assert_eq!(random.next_index(10), 0);
/// assert_eq!(random.next_index(10), 5);
/// assert_eq!(random.next_index(10), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    /// # Panics
    /// Panics if `values` is empty
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}
