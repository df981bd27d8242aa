//! High-level runtime engine settings
//!
//! Selects whether colliding bodies are merged after each step and whether
//! the pairwise force sum runs on the rayon pool

use crate::configuration::config::EngineConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    pub collisions: bool, // merge overlapping bodies after every step
    pub parallel: bool,   // false = serial pair loop, true = rayon partial sums
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            collisions: cfg.collisions,
            parallel: cfg.parallel,
        }
    }
}
