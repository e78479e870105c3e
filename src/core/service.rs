//! Service duration sources.

use rand::Rng;

/// Draws how many units a customer occupies a counter.
///
/// Implementations are shared by every customer task of a run.
pub trait ServiceTime: Send + Sync + 'static {
    /// Service duration for one customer, in whole units.
    fn sample(&self) -> u64;
}

/// Uniform draw from an inclusive range of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformServiceTime {
    min_units: u64,
    max_units: u64,
}

impl UniformServiceTime {
    /// Range `[min_units, max_units]`; bounds are swapped if given reversed.
    pub const fn new(min_units: u64, max_units: u64) -> Self {
        if min_units <= max_units {
            Self {
                min_units,
                max_units,
            }
        } else {
            Self {
                min_units: max_units,
                max_units: min_units,
            }
        }
    }
}

impl ServiceTime for UniformServiceTime {
    fn sample(&self) -> u64 {
        rand::rng().random_range(self.min_units..=self.max_units)
    }
}

/// Every customer takes the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedServiceTime(pub u64);

impl ServiceTime for FixedServiceTime {
    fn sample(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let source = UniformServiceTime::new(6, 10);
        for _ in 0..1_000 {
            let units = source.sample();
            assert!((6..=10).contains(&units), "sampled {units}");
        }
    }

    #[test]
    fn test_uniform_reversed_bounds() {
        assert_eq!(UniformServiceTime::new(10, 6), UniformServiceTime::new(6, 10));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(UniformServiceTime::new(8, 8).sample(), 8);
        assert_eq!(FixedServiceTime(6).sample(), 6);
    }
}
