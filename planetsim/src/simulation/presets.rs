//! Named body factories with canned or randomized initial conditions
//!
//! Random presets take the generator from the caller so a seeded scenario
//! always builds the same bodies.

use rand::Rng;

use super::constants::{D_EARTH_SUN, M_EARTH, M_SUN, R_EARTH, R_SUN, V_EARTH};
use super::forces::{gravitational_acceleration, gravitational_force};
use super::states::{Body, NVec3};
use crate::error::SimResult;

/// Uniform in [-1, 1)
fn ran<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    -1.0 + 2.0 * rng.gen::<f64>()
}

fn ran_vec<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> NVec3 {
    NVec3::new(ran(rng) * scale, ran(rng) * scale, ran(rng) * scale)
}

/// Sun at the origin, at rest
pub fn static_sun(name: &str) -> SimResult<Body> {
    Body::new(name, R_SUN, M_SUN, NVec3::zeros(), NVec3::zeros())
}

/// Sun somewhere within one AU of the origin, moving at up to Earth's speed per axis
pub fn random_sun<R: Rng + ?Sized>(name: &str, rng: &mut R) -> SimResult<Body> {
    let position = ran_vec(rng, D_EARTH_SUN);
    let velocity = ran_vec(rng, V_EARTH);
    Body::new(name, R_SUN, M_SUN, position, velocity)
}

/// Earth at the origin, at rest
pub fn static_earth(name: &str) -> SimResult<Body> {
    Body::new(name, R_EARTH, M_EARTH, NVec3::zeros(), NVec3::zeros())
}

pub fn random_earth<R: Rng + ?Sized>(name: &str, rng: &mut R) -> SimResult<Body> {
    let position = ran_vec(rng, D_EARTH_SUN);
    let velocity = ran_vec(rng, V_EARTH);
    Body::new(name, R_EARTH, M_EARTH, position, velocity)
}

/// Earth at the mean Sun distance on +x with its mean orbital speed along +y
pub fn real_earth(name: &str) -> SimResult<Body> {
    Body::new(
        name,
        R_EARTH,
        M_EARTH,
        NVec3::new(D_EARTH_SUN, 0.0, 0.0),
        NVec3::new(0.0, V_EARTH, 0.0),
    )
}

/// Earth placed at `x` on the x axis with the tangential speed sqrt(a x) that
/// balances the engine's pull from `center`
pub fn circular_orbit_earth(center: &Body, x: f64, g: f64) -> SimResult<Body> {
    let mut earth = static_earth("earth")?;
    earth.position = NVec3::new(x, 0.0, 0.0);

    let f = gravitational_force(center, &earth, g)?;
    let a = gravitational_acceleration(f, &earth);
    earth.velocity = NVec3::new(0.0, (a * x).sqrt(), 0.0);
    Ok(earth)
}
