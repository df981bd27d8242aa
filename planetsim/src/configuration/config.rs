//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – collision merging and parallel force summation
//! - [`ParametersConfig`] – horizon, step, reporting, seed, gravitational constant
//! - [`BodyConfig`]       – initial state for each body, explicit or a named preset
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   collisions: true        # merge overlapping bodies after each step
//!   parallel: false         # rayon pair loop
//!
//! parameters:
//!   time_horizon: 5.0       # years
//!   time_step: 0.5          # days
//!   report_every: 365       # iterations between reports, 0 = never
//!   seed: 42                # seed for random presets
//!   G: 6.6743e-11           # optional, SI value by default
//!
//! bodies:
//!   - preset: static_sun
//!     name: "1"
//!   - name: "2"
//!     radius: 6.9551e8
//!     mass: 5.972e24
//!     x: [1.496e11, 0.0, 0.0]
//!     v: [0.0, 29780.0, 0.0]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::constants::G;

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub collisions: bool, // `true` - merge colliding bodies every step
    #[serde(default)]
    pub parallel: bool, // `true` - split the pair loop over the rayon pool
}

fn default_seed() -> u64 {
    42
}

fn default_g() -> f64 {
    G
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub time_horizon: f64, // years
    pub time_step: f64,    // days
    #[serde(default)]
    pub report_every: usize,
    #[serde(default = "default_seed")]
    pub seed: u64, // makes random presets reproducible
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

/// Named initial conditions, see `simulation::presets`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    StaticSun,
    RandomSun,
    StaticEarth,
    RandomEarth,
    RealEarth,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum BodyConfig {
    Preset {
        preset: PresetKind,
        name: String,
    },
    Explicit {
        name: String,
        radius: f64,
        mass: f64,
        x: [f64; 3], // initial position, m
        #[serde(default)]
        v: [f64; 3], // initial velocity, m/s
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
