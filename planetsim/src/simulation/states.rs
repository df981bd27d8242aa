//! Core state types for the planet simulation.
//!
//! - `Body`   one sphere with physical and kinematic state
//! - `BodyId` stable identity assigned at creation, survives reordering
//! - `System` the ordered body collection plus elapsed simulated time
//!
//! Radius and mass are private so the positivity invariant cannot be broken
//! after construction; kinematic state is public like any other plain data.

use std::f64::consts::PI;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Vector3;
use serde::Serialize;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Process-wide unique body identity
/// Ids are handed out in creation order, so sorting by id sorts by age
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BodyId(u64);

impl BodyId {
    fn next() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One simulated sphere.
///
/// `Clone` keeps the id: a clone is a snapshot of the same body (as in
/// history bookkeeping or a scratch copy for collision resolution), not a new
/// body. Build new bodies with [`Body::new`] to get a fresh identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    pub name: String, // label, concatenated on merge
    radius: f64,
    mass: f64,
    pub position: NVec3,
    pub velocity: NVec3,
    acceleration: NVec3, // recomputed every step, never carried over
}

impl Body {
    /// Build a body at rest in acceleration
    /// Fails with [`SimError::InvalidBody`] unless radius, mass and the
    /// derived volume are finite and > 0
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        mass: f64,
        position: NVec3,
        velocity: NVec3,
    ) -> SimResult<Self> {
        let name = name.into();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        // a finite radius above ~2.9e102 still overflows (4/3) pi r^3
        if !valid(radius) || !valid(mass) || !valid(sphere_volume(radius)) {
            return Err(SimError::InvalidBody { name, radius, mass });
        }

        Ok(Self {
            id: BodyId::next(),
            name,
            radius,
            mass,
            position,
            velocity,
            acceleration: NVec3::zeros(),
        })
    }

    /// Seed a starting acceleration, mostly useful for hand-built test states
    pub fn with_acceleration(mut self, acceleration: NVec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn acceleration(&self) -> NVec3 {
        self.acceleration
    }

    /// (4/3) pi r^3
    pub fn volume(&self) -> f64 {
        sphere_volume(self.radius)
    }

    pub fn density(&self) -> f64 {
        self.mass / self.volume()
    }

    /// Euclidean distance between the two centers
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    /// x += v dt
    pub fn update_position(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// v += a dt
    /// Only meaningful after the accelerations for the current step were computed
    pub fn update_velocity(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
    }

    pub fn clear_acceleration(&mut self) {
        self.acceleration = NVec3::zeros();
    }

    /// Add a contribution to the current acceleration.
    /// Drivers should go through the force accumulator instead of calling this.
    pub fn accumulate_acceleration(&mut self, delta: NVec3) {
        self.acceleration += delta;
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection, order drives pairing
    pub t: f64,            // elapsed simulated time in seconds
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }
}
