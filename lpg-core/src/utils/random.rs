#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;
use std::sync::Mutex;

/// Provides randomized values used to jitter estimates.
pub trait Random {
    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;
}

/// A default random implementation backed by a thread local generator.
#[derive(Default)]
pub struct DefaultRandom {}

impl Random for DefaultRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        DEFAULT_RNG.with(|rng| rng.borrow_mut().gen_range(min..max))
    }
}

thread_local! {
    static DEFAULT_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// A random implementation which produces the same sequence of values for the same seed.
pub struct RepeatableRandom {
    rng: Mutex<SmallRng>,
}

impl RepeatableRandom {
    /// Creates a new instance of `RepeatableRandom` using given seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl Random for RepeatableRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }
}
