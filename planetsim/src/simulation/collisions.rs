//! Overlap detection and inelastic merging of bodies
//!
//! Two bodies overlap when their centers are closer than the larger of the
//! two radii (not the sum). The first overlapping pair in index order is
//! merged, the merged body goes to the back of the collection, and the scan
//! starts over until a full pass finds nothing.

use log::debug;

use crate::error::SimResult;
use crate::simulation::states::{Body, BodyId};

/// One merge performed by [`resolve_collisions_logged`]
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub parents: [BodyId; 2],
    pub merged: BodyId,
    pub name: String,
}

/// d < max(r_lhs, r_rhs)
pub fn overlapping(lhs: &Body, rhs: &Body) -> bool {
    lhs.distance_to(rhs) < lhs.radius().max(rhs.radius())
}

/// Merge two bodies conserving mass, volume and linear momentum.
/// Position and velocity are mass-weighted averages, acceleration starts at
/// zero and the name is the concatenation of both parents.
pub fn combine(lhs: &Body, rhs: &Body) -> SimResult<Body> {
    let name = format!("{}{}", lhs.name, rhs.name);

    let mass = lhs.mass() + rhs.mass();
    let w_lhs = lhs.mass() / mass;
    let w_rhs = 1.0 - w_lhs;

    // volume is additive, radius follows from it
    let volume = lhs.volume() + rhs.volume();
    let radius = (volume * (3.0 / 4.0) / std::f64::consts::PI).cbrt();

    let position = lhs.position * w_lhs + rhs.position * w_rhs;
    let velocity = lhs.velocity * w_lhs + rhs.velocity * w_rhs;

    Body::new(name, radius, mass, position, velocity)
}

/// Index pair (i < j) of the first overlapping bodies in scan order
fn first_collision(bodies: &[Body]) -> Option<(usize, usize)> {
    let n = bodies.len();

    // Outer index strictly below inner one: every unordered pair once,
    // in ascending index order, so the first hit is the lowest (i, j)
    for i in 0..n {
        for j in (i + 1)..n {
            // overlap uses the larger radius only, not r_i + r_j
            if overlapping(&bodies[i], &bodies[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Merge until no pair overlaps, returning the resolved collection.
/// The input is never modified; on error the caller still holds it intact.
pub fn resolve_collisions(bodies: &[Body]) -> SimResult<Vec<Body>> {
    resolve_collisions_logged(bodies).map(|(bodies, _)| bodies)
}

/// Like [`resolve_collisions`], also returning every merge in the order it
/// happened so callers can re-key per-body history
pub fn resolve_collisions_logged(bodies: &[Body]) -> SimResult<(Vec<Body>, Vec<MergeEvent>)> {
    // work on a copy so a failing merge halfway through leaves no trace
    let mut bodies = bodies.to_vec();
    let mut events = Vec::new();

    // Fixed-point loop instead of recursion:
    // - find the first overlapping pair in index order
    // - replace both with their merge, appended at the back
    // - rescan from scratch, the merged body may now reach a third one
    // At most n - 1 rounds, each one shrinks the collection by one
    while let Some((i, j)) = first_collision(&bodies) {
        // Build the merged body before touching the collection
        let merged = combine(&bodies[i], &bodies[j])?;

        // j > i, remove the higher index first so i stays valid
        let rhs = bodies.remove(j);
        let lhs = bodies.remove(i);

        debug!(
            "merged `{}` {} and `{}` {} into `{}` {}",
            lhs.name,
            lhs.id(),
            rhs.name,
            rhs.id(),
            merged.name,
            merged.id()
        );

        // Provenance for id-keyed history
        events.push(MergeEvent {
            parents: [lhs.id(), rhs.id()],
            merged: merged.id(),
            name: merged.name.clone(),
        });

        // Merged body goes to the back, order of the others is kept
        bodies.push(merged);
    }

    Ok((bodies, events))
}
