//! Position history keyed by body identity
//!
//! Tracks are looked up by [`BodyId`], so merges (which reorder and shrink the
//! body collection) never shift one body's samples into another's track.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::simulation::collisions::MergeEvent;
use crate::simulation::constants::R_EARTH;
use crate::simulation::states::{Body, BodyId, NVec3};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Track {
    pub name: String,
    pub samples: Vec<NVec3>,
    pub parents: Option<[BodyId; 2]>, // set when the body was born from a merge
    pub merged_into: Option<BodyId>,  // set once the body was absorbed
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Trajectories {
    tracks: BTreeMap<BodyId, Track>,
}

impl Trajectories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the current position of every body to its own track
    pub fn record(&mut self, bodies: &[Body]) {
        for b in bodies {
            self.tracks
                .entry(b.id())
                .or_insert_with(|| Track {
                    name: b.name.clone(),
                    ..Track::default()
                })
                .samples
                .push(b.position);
        }
    }

    /// Link parent and child tracks for each merge
    pub fn record_merges(&mut self, events: &[MergeEvent]) {
        for e in events {
            for parent in e.parents {
                if let Some(track) = self.tracks.get_mut(&parent) {
                    track.merged_into = Some(e.merged);
                }
            }
            self.tracks.entry(e.merged).or_insert_with(|| Track {
                name: e.name.clone(),
                ..Track::default()
            }).parents = Some(e.parents);
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    /// Tracks in body creation order
    pub fn iter(&self) -> impl Iterator<Item = (&BodyId, &Track)> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Viewport bounds along `axis` that contain every body, widening `current`.
/// Always spans at least one Earth radius on both sides of the origin.
pub fn axis_limits(bodies: &[Body], axis: Axis, current: (f64, f64)) -> (f64, f64) {
    let (mut lo, mut hi) = current;
    for b in bodies {
        let c = b.position[axis.index()];
        if c > 0.0 {
            hi = hi.max(c);
        } else {
            lo = lo.min(c);
        }
    }
    (lo.min(-R_EARTH), hi.max(R_EARTH))
}
