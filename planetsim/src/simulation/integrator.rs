//! Fixed-step semi-implicit Euler integration
//!
//! Velocity is advanced from the current acceleration first, then position
//! from the already-updated velocity, both with the same `dt`.

use super::forces::AccelSet;
use super::states::{Body, System};
use crate::error::SimResult;

/// v += a dt for a single body
pub fn integrate_velocity(body: &mut Body, dt: f64) {
    body.update_velocity(dt);
}

/// x += v dt for a single body
pub fn integrate_position(body: &mut Body, dt: f64) {
    body.update_position(dt);
}

/// Advance the system by one step of `dt` seconds.
/// Accelerations are recomputed from scratch before any body moves; if that
/// fails the system is left exactly as it was. Time advances even when the
/// system holds no bodies.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, dt: f64) -> SimResult<()> {
    // a_n from x_n, written into every body at once or not at all
    forces.apply(&mut sys.bodies)?;

    // Kick then drift, same dt:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        integrate_velocity(b, dt);
        integrate_position(b, dt);
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;
    Ok(())
}
