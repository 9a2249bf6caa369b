#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::Error;
use rand::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation which owns its generator: every run creates its own
/// instance, so two instances with the same seed produce the same sequence of values.
pub struct DefaultRandom {
    rng: Arc<Mutex<StdRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with a fixed seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Arc::new(Mutex::new(StdRng::from_entropy())) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type: a handle which shares the generator state
/// of its owner.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomGen {
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.lock().try_fill_bytes(dest)
    }
}
