//! Collision detection, no response
//!
//! Callers decide what to do with colliding bodies.

use crate::simulation::engine::Simulation;
use crate::simulation::states::{Body, BodyId};

/// Two bodies overlap or touch: distance ≤ r1 + r2
pub fn are_colliding<const D: usize>(b1: &Body<D>, b2: &Body<D>) -> bool {
    b1.distance_to(b2) <= b1.radius + b2.radius
}

/// A detected overlap between two bodies
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPair {
    pub first: BodyId,
    pub second: BodyId,
    pub separation: f64, // current center distance (m)
}

impl<const D: usize> Simulation<D> {
    /// Every unordered colliding pair, in body order
    pub fn collisions(&self) -> Vec<CollisionPair> {
        let bodies = self.bodies();
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..]
                    .iter()
                    .filter(move |b| are_colliding(a, b))
                    .map(move |b| CollisionPair {
                        first: a.id.clone(),
                        second: b.id.clone(),
                        separation: a.distance_to(b),
                    })
            })
            .collect()
    }
}
