pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyId, System, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, PlanetGravity, PlanetGravityPar, compute_accelerations};
pub use simulation::integrator::{integrate_velocity, integrate_position, semi_implicit_euler};
pub use simulation::collisions::{combine, overlapping, resolve_collisions, resolve_collisions_logged, MergeEvent};
pub use simulation::history::{Trajectories, Track, Axis, axis_limits};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, PresetKind, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};
