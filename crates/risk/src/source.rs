use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BaseRange;

/// Where the random base risk comes from.
///
/// Production uses an unseeded generator so repeated calls differ. Tests and
/// reproducible runs inject [`SeededSource`] or [`FixedBase`].
pub trait BaseRiskSource: Send {
    fn draw(&mut self, range: &BaseRange) -> f64;
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &BaseRange) -> f64 {
    if range.min < range.max {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

/// Draws from the thread-local generator on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl BaseRiskSource for ThreadRngSource {
    fn draw(&mut self, range: &BaseRange) -> f64 {
        sample(&mut rand::thread_rng(), range)
    }
}

pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BaseRiskSource for SeededSource {
    fn draw(&mut self, range: &BaseRange) -> f64 {
        sample(&mut self.rng, range)
    }
}

/// Always yields the same base, ignoring the configured range.
#[derive(Debug, Clone, Copy)]
pub struct FixedBase(pub f64);

impl BaseRiskSource for FixedBase {
    fn draw(&mut self, _range: &BaseRange) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_source_stays_in_range() {
        let range = BaseRange::default();
        let mut source = ThreadRngSource;
        for _ in 0..1_000 {
            let base = source.draw(&range);
            assert!((0.2..0.8).contains(&base), "base={base}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let range = BaseRange::default();
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        for _ in 0..10 {
            assert_eq!(a.draw(&range), b.draw(&range));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let range = BaseRange { min: 0.4, max: 0.4 };
        assert_eq!(ThreadRngSource.draw(&range), 0.4);
    }
}
