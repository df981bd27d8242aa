//! Force / acceleration contributors for the planet engine
//!
//! Defines the acceleration trait, the set that sums terms into a scratch
//! buffer, and the pairwise planet gravity term in a serial and a rayon form.
//!
//! The acceleration magnitude of a pair is `sqrt(F / m)`, not `F / m`.
//! Existing trajectories and tests were produced with this law, so it is kept
//! as-is; it is not Newtonian and will not reproduce real orbits.

use rayon::prelude::*;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) -> SimResult<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out)?;
        }
        Ok(())
    }

    /// Clear every body's acceleration and write the freshly summed one.
    /// All-or-nothing: on error no body is touched.
    pub fn apply(&self, bodies: &mut [Body]) -> SimResult<()> {
        let mut out = vec![NVec3::zeros(); bodies.len()];
        self.accumulate_accels(bodies, &mut out)?;

        for (b, a) in bodies.iter_mut().zip(out) {
            b.clear_acceleration();
            b.accumulate_acceleration(a);
        }
        Ok(())
    }
}

/// Trait for acceleration sources operating on a body slice
/// Implementations add their contribution into `out[i]` for each body and
/// never reset it, so calling a term twice double-accumulates
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) -> SimResult<()>;
}

/// Scalar force magnitude G m1 m2 / d^2
pub fn gravitational_force(lhs: &Body, rhs: &Body, g: f64) -> SimResult<f64> {
    let d = lhs.distance_to(rhs);
    if d == 0.0 {
        return Err(degenerate(lhs, rhs));
    }
    Ok(g * lhs.mass() * rhs.mass() / (d * d))
}

/// Acceleration magnitude a body gets out of a pair force: sqrt(F / m)
pub fn gravitational_acceleration(force: f64, body: &Body) -> f64 {
    (force / body.mass()).sqrt()
}

/// Clear and recompute every body's acceleration from all others
pub fn compute_accelerations(bodies: &mut [Body], g: f64) -> SimResult<()> {
    AccelSet::new().with(PlanetGravity { g }).apply(bodies)
}

fn degenerate(lhs: &Body, rhs: &Body) -> SimError {
    SimError::DegenerateConfiguration {
        lhs: lhs.name.clone(),
        rhs: rhs.name.clone(),
    }
}

/// Contribution of one unordered pair, (onto lhs, onto rhs)
fn pair_accelerations(lhs: &Body, rhs: &Body, g: f64) -> SimResult<(NVec3, NVec3)> {
    // r is the displacement vector from lhs to rhs.
    // lhs feels a pull along +r, rhs along -r
    let r = rhs.position - lhs.position;

    // Separation |r|, no softening: coincident centers have no direction
    let d = r.norm();
    if d == 0.0 {
        return Err(degenerate(lhs, rhs));
    }

    // Scalar pair force F = G m_lhs m_rhs / d^2 (same for both bodies)
    let f = g * lhs.mass() * rhs.mass() / (d * d);

    // Per-body magnitude sqrt(F / m), so the lighter body moves more
    let a_lhs = gravitational_acceleration(f, lhs);
    let a_rhs = gravitational_acceleration(f, rhs);

    // Unit direction lhs -> rhs
    let unit = r / d;

    // lhs along +unit, rhs along -unit (equal and opposite in direction)
    Ok((unit * a_lhs, -unit * a_rhs))
}

/// Direct all-pairs planet gravity, one pass per unordered pair
pub struct PlanetGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for PlanetGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) -> SimResult<()> {
        // Number of bodies in the system
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &bodies[i];

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &bodies[j];

                // Pair contribution, already signed for each side
                let (a_i, a_j) = pair_accelerations(bi, bj, self.g)?;

                // Acceleration on body i due to body j: toward j
                out[i] += a_i;

                // Acceleration on body j due to body i: toward i
                out[j] += a_j;
            }
        }
        Ok(())
    }
}

/// Same law as [`PlanetGravity`], split over the rayon pool.
/// Each worker folds into its own buffer and the buffers are summed at the
/// end, no body is written concurrently.
pub struct PlanetGravityPar {
    pub g: f64,
}

impl Acceleration for PlanetGravityPar {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) -> SimResult<()> {
        let n = bodies.len();
        let g = self.g;

        // Each rayon job owns the outer index i and adds every (i, j > i)
        // pair into its own full-size buffer; buffers are summed pairwise
        let partial = (0..n)
            .into_par_iter()
            .try_fold(
                || vec![NVec3::zeros(); n],
                |mut acc, i| {
                    for j in (i + 1)..n {
                        let (a_i, a_j) = pair_accelerations(&bodies[i], &bodies[j], g)?;
                        acc[i] += a_i;
                        acc[j] += a_j;
                    }
                    Ok::<_, SimError>(acc)
                },
            )
            .try_reduce(
                || vec![NVec3::zeros(); n],
                |mut lhs, rhs| {
                    for (a, b) in lhs.iter_mut().zip(rhs) {
                        *a += b;
                    }
                    Ok(lhs)
                },
            )?;

        // Add onto out, never reset it, like the serial term
        for (o, a) in out.iter_mut().zip(partial) {
            *o += a;
        }
        Ok(())
    }
}
