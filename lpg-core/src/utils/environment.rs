use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by sequencer
/// and calculators.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` which discards all log messages.
    pub fn new_silent() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|_| {}) }
    }
}
