//! Fixed-step time integration for a single body
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! position then drifts with the new velocity.

use nalgebra::SVector;

use crate::error::PhysicsError;
use crate::simulation::states::Body;
use crate::simulation::vector::VectorExt;

/// Advance `body` by `dt` under a constant `force`, in place
///
/// Fails with [`PhysicsError::ZeroDivisor`] for a zero-mass body, in which
/// case the body is left untouched.
pub fn integrate<const D: usize>(body: &mut Body<D>, force: &SVector<f64, D>, dt: f64) -> Result<(), PhysicsError> {
    // a = F / m
    let a = force.checked_div(body.mass)?;

    // Kick: v_n+1 = v_n + a dt
    body.velocity += a * dt;

    // Drift with the updated velocity: x_n+1 = x_n + v_n+1 dt
    body.position += body.velocity * dt;

    Ok(())
}
