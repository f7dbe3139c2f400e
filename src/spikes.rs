//! Sources of spike lengths.
//!
//! The generator never reaches for a global RNG: every spike length comes
//! from a [`SpikeSource`] passed in by the caller. That keeps generation
//! reproducible under test and lets independent generations run on separate
//! threads with separate sources.

use rand::Rng;

/// Supplies one spike length per call.
pub trait SpikeSource {
    /// Return a length in `[0, max)`. `max` is always finite and positive.
    fn spike_length(&mut self, max: f64) -> f64;
}

impl<S: SpikeSource + ?Sized> SpikeSource for &mut S {
    fn spike_length(&mut self, max: f64) -> f64 {
        (**self).spike_length(max)
    }
}

/// Uniformly random spike lengths drawn from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomSpikes<R> {
    rng: R,
}

impl<R: Rng> RandomSpikes<R> {
    pub fn new(rng: R) -> Self {
        RandomSpikes { rng }
    }
}

impl<R: Rng> SpikeSource for RandomSpikes<R> {
    fn spike_length(&mut self, max: f64) -> f64 {
        // A subnormal arm length can halve to zero, leaving nothing to sample
        if max.is_nan() || max <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..max)
    }
}

/// Every spike is the same fraction of the maximum length.
///
/// The fraction is clamped into `[0, 1)` so the result stays inside the
/// range a random source could produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSpikes(pub f64);

impl FixedSpikes {
    const MAX_FRACTION: f64 = 1.0 - f64::EPSILON;

    fn fraction(self) -> f64 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0.clamp(0.0, Self::MAX_FRACTION)
        }
    }
}

impl SpikeSource for FixedSpikes {
    fn spike_length(&mut self, max: f64) -> f64 {
        self.fraction() * max
    }
}
