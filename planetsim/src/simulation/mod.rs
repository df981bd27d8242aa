pub mod states;
pub mod constants;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod history;
pub mod presets;
pub mod report;
pub mod scenario;
