//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - horizon (years) and step size (days), the units the driver loop counts in,
//! - reporting cadence,
//! - random seed for the randomized presets,
//! - gravitational constant `g`

use super::constants::{DAYS_TO_SEC, DAYS_TO_YEARS, G};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_horizon: f64, // years
    pub time_step: f64,    // days
    pub report_every: usize, // iterations between reports, 0 = silent
    pub seed: u64,
    pub g: f64,
}

impl Parameters {
    pub fn new(time_horizon: f64, time_step: f64) -> Self {
        Self {
            time_horizon,
            time_step,
            report_every: 0,
            seed: 42,
            g: G,
        }
    }

    /// Check what the driver loop needs to terminate.
    /// The integrator itself takes any `dt`; only the horizon loop cares.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimError::InvalidParameters(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        if !self.time_horizon.is_finite() {
            return Err(SimError::InvalidParameters(format!(
                "time_horizon must be finite, got {}",
                self.time_horizon
            )));
        }
        Ok(())
    }

    /// Integration step in seconds
    pub fn dt(&self) -> f64 {
        self.time_step * DAYS_TO_SEC
    }

    /// Step length in years, the unit the horizon is measured in
    pub fn step_years(&self) -> f64 {
        self.time_step * DAYS_TO_YEARS
    }
}
