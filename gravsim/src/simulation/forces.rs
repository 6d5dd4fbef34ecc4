//! Pairwise Newtonian gravity for the n-body engine
//!
//! Free functions compute the force between two point masses and the total
//! force on one body. [`NewtonianGravity`] bundles a gravitational constant
//! with those functions and produces the per-body force table used by the
//! first phase of a simulation step.

use std::collections::HashMap;

use nalgebra::SVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::PhysicsError;
use crate::simulation::params::G_SI;
use crate::simulation::states::{Body, BodyId};
use crate::simulation::vector::VectorExt;

/// |F| = G m1 m2 / d²
///
/// Fails with [`PhysicsError::ZeroDivisor`] when `distance` is exactly zero.
pub fn gravitational_force_magnitude(m1: f64, m2: f64, distance: f64, g: f64) -> Result<f64, PhysicsError> {
    if distance == 0.0 {
        return Err(PhysicsError::ZeroDivisor);
    }
    Ok(g * m1 * m2 / (distance * distance))
}

/// Force on mass 1 at `pos1` due to mass 2 at `pos2`, pointing toward `pos2`
///
/// Coincident positions yield the zero vector rather than an error, unlike
/// [`gravitational_force_magnitude`].
pub fn gravitational_force_vector<const D: usize>(
    m1: f64,
    pos1: &SVector<f64, D>,
    m2: f64,
    pos2: &SVector<f64, D>,
    g: f64,
) -> SVector<f64, D> {
    // r points from body 1 to body 2
    let r = pos2 - pos1;
    let distance = r.magnitude();

    match gravitational_force_magnitude(m1, m2, distance, g) {
        Ok(f) => r.normalized_or_zero() * f,
        Err(_) => SVector::zeros(),
    }
}

/// Force experienced by `body1` due to `body2`
pub fn force_between_bodies<const D: usize>(body1: &Body<D>, body2: &Body<D>, g: f64) -> SVector<f64, D> {
    gravitational_force_vector(body1.mass, &body1.position, body2.mass, &body2.position, g)
}

/// Sum of forces on `target` from every body in `bodies`
///
/// Bodies sharing `target`'s id are skipped, including distinct bodies that
/// happen to carry the same id.
pub fn total_force_on_body<const D: usize>(target: &Body<D>, bodies: &[Body<D>], g: f64) -> SVector<f64, D> {
    bodies
        .iter()
        .filter(|other| other.id != target.id)
        .map(|other| force_between_bodies(target, other, g))
        .fold(SVector::zeros(), |acc, f| acc + f)
}

/// Direct O(n²) Newtonian gravity with a fixed gravitational constant
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: G_SI }
    }
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { G: g }
    }

    /// Total force on `target` from the rest of `bodies`
    pub fn force_on<const D: usize>(&self, target: &Body<D>, bodies: &[Body<D>]) -> SVector<f64, D> {
        total_force_on_body(target, bodies, self.G)
    }

    /// Force on every body, keyed by id, computed from the current positions
    ///
    /// The table is complete before it is returned. Duplicate ids collapse
    /// into one entry and the last body wins.
    pub fn forces<const D: usize>(&self, bodies: &[Body<D>]) -> HashMap<BodyId, SVector<f64, D>> {
        #[cfg(feature = "parallel")]
        let pairs: Vec<(BodyId, SVector<f64, D>)> = bodies
            .par_iter()
            .map(|b| (b.id.clone(), self.force_on(b, bodies)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let pairs: Vec<(BodyId, SVector<f64, D>)> = bodies
            .iter()
            .map(|b| (b.id.clone(), self.force_on(b, bodies)))
            .collect();

        // collect in body order so the last duplicate id overwrites earlier ones
        pairs.into_iter().collect()
    }
}
