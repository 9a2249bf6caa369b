use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of the environment specific settings which controls search behavior.
/// A single environment is owned by one search run.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an environment with a repeatable random generator seeded by `seed` and default logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Creates an environment which discards all log messages.
    pub fn new_silent(random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { random, logger: Arc::new(|_: &str| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}
