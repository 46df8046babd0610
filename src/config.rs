//! Run parameters.
//!
//! [`PainterConfig`] holds everything that controls the evolutionary loop. The engine
//! validates it once at construction and trusts it afterwards.
//!
//! ```
//! use genetic_painter::PainterConfig;
//!
//! let config = PainterConfig::default()
//!     .with_generations(50)
//!     .with_pools(8)
//!     .with_recombine_depth(3)
//!     .with_seed(42);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{PainterError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PainterConfig {
    /// Generations to run after the initial population is built.
    pub generations: usize,

    /// Population size. Stays fixed for the whole run.
    pub pools: usize,

    /// Chance (0.0–1.0) that a member is mutated at the start of a generation.
    pub mutation_rate: f64,

    /// How many top-ranked members are chained into every child.
    ///
    /// Must not exceed `pools`.
    pub recombine_depth: usize,

    /// Random seed; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Generations between progress log lines. 0 disables them.
    pub log_interval: usize,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            pools: 10,
            mutation_rate: 0.2,
            recombine_depth: 5,
            seed: None,
            log_interval: 10,
        }
    }
}

impl PainterConfig {
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_pools(mut self, n: usize) -> Self {
        self.pools = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_recombine_depth(mut self, depth: usize) -> Self {
        self.recombine_depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    /// Check every parameter the engine relies on.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(PainterError::InvalidConfiguration(msg.into()));
        if self.pools == 0 {
            return invalid("pools must be at least 1");
        }
        if self.recombine_depth == 0 {
            return invalid("recombine_depth must be at least 1");
        }
        if self.recombine_depth > self.pools {
            return invalid("recombine_depth cannot exceed pools");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid("mutation_rate must be within [0, 1]");
        }
        Ok(())
    }
}
