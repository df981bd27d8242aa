//! Build and run fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) or a hand-built body list and
//! produces a runtime bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! [`Scenario::run`] is the driver loop: report, record, step, merge.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{BodyConfig, PresetKind, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::collisions::resolve_collisions_logged;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, PlanetGravity, PlanetGravityPar};
use crate::simulation::history::Trajectories;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::presets;
use crate::simulation::report::report;
use crate::simulation::states::{Body, NVec3, System};

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

fn force_set(engine: &Engine, g: f64) -> AccelSet {
    if engine.parallel {
        AccelSet::new().with(PlanetGravityPar { g })
    } else {
        AccelSet::new().with(PlanetGravity { g })
    }
}

fn build_body(bc: &BodyConfig, rng: &mut ChaCha8Rng) -> SimResult<Body> {
    match bc {
        BodyConfig::Preset { preset, name } => match preset {
            PresetKind::StaticSun => presets::static_sun(name),
            PresetKind::RandomSun => presets::random_sun(name, rng),
            PresetKind::StaticEarth => presets::static_earth(name),
            PresetKind::RandomEarth => presets::random_earth(name, rng),
            PresetKind::RealEarth => presets::real_earth(name),
        },
        BodyConfig::Explicit { name, radius, mass, x, v } => Body::new(
            name.as_str(),
            *radius,
            *mass,
            NVec3::from(*x),
            NVec3::from(*v),
        ),
    }
}

impl Scenario {
    pub fn new(bodies: Vec<Body>, parameters: Parameters, engine: Engine) -> Self {
        let forces = force_set(&engine, parameters.g);
        Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            time_horizon: p_cfg.time_horizon,
            time_step: p_cfg.time_step,
            report_every: p_cfg.report_every,
            seed: p_cfg.seed,
            g: p_cfg.G,
        };
        parameters.validate()?;

        // Bodies: presets draw from one generator in file order
        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, &mut rng))
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self::new(bodies, parameters, Engine::from(&cfg.engine)))
    }

    /// Run until the horizon and return the recorded positions.
    /// A run of k iterations yields k + 1 samples for a body that never merged.
    /// Fails up front with [`crate::SimError::InvalidParameters`] when the step
    /// could never reach the horizon.
    pub fn run(&mut self) -> SimResult<Trajectories> {
        self.parameters.validate()?;

        let dt = self.parameters.dt();
        let step_years = self.parameters.step_years();
        let report_every = self.parameters.report_every;

        let mut trajectories = Trajectories::new();
        let mut elapsed = 0.0; // years
        let mut iteration = 0;

        info!(
            "running {} bodies for {} years, dt = {} s",
            self.system.bodies.len(),
            self.parameters.time_horizon,
            dt
        );

        while elapsed <= self.parameters.time_horizon {
            if report_every > 0 && iteration % report_every == 0 {
                info!("Time (in y): {} --- Number of planets: {}", elapsed, self.system.bodies.len());
                report(&self.system.bodies, iteration, elapsed);
            }
            trajectories.record(&self.system.bodies);

            semi_implicit_euler(&mut self.system, &self.forces, dt)?;

            if self.engine.collisions {
                // bodies are only replaced once resolution succeeded
                let (bodies, merges) = resolve_collisions_logged(&self.system.bodies)?;
                if !merges.is_empty() {
                    info!("{} merge(s) at {:.6} years, {} bodies left", merges.len(), elapsed, bodies.len());
                }
                trajectories.record_merges(&merges);
                self.system.bodies = bodies;
            }

            elapsed += step_years;
            iteration += 1;
        }
        trajectories.record(&self.system.bodies);

        info!("finished after {} iterations with {} bodies", iteration, self.system.bodies.len());
        Ok(trajectories)
    }
}
