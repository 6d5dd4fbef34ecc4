//! Conservation diagnostics
//!
//! Recomputed from the current bodies on every call. Nothing here feeds
//! back into the integration.

use nalgebra::SVector;

use crate::error::PhysicsError;
use crate::simulation::engine::{Simulation, Simulation2, Simulation3};
use crate::simulation::states::NVec3;

impl<const D: usize> Simulation<D> {
    /// Σ ½ m |v|²
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies().iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Σ over pairs i < j of −G mᵢ mⱼ / dᵢⱼ
    ///
    /// Fails with [`PhysicsError::CoincidentBodies`] for the first pair found
    /// at exactly the same position.
    pub fn potential_energy(&self) -> Result<f64, PhysicsError> {
        let bodies = self.bodies();
        let mut potential = 0.0;

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let d = a.distance_to(b);
                if d == 0.0 {
                    return Err(PhysicsError::CoincidentBodies {
                        first: a.id.clone(),
                        second: b.id.clone(),
                    });
                }
                potential -= self.g() * a.mass * b.mass / d;
            }
        }

        Ok(potential)
    }

    /// Kinetic plus potential energy (J)
    pub fn total_energy(&self) -> Result<f64, PhysicsError> {
        Ok(self.kinetic_energy() + self.potential_energy()?)
    }

    /// Σ m v, should stay near zero drift for an isolated system
    pub fn total_momentum(&self) -> SVector<f64, D> {
        self.bodies()
            .iter()
            .map(|b| b.momentum())
            .fold(SVector::zeros(), |acc, p| acc + p)
    }

    /// Mass-weighted mean position, `None` when the total mass is zero
    pub fn center_of_mass(&self) -> Option<SVector<f64, D>> {
        let total_mass: f64 = self.bodies().iter().map(|b| b.mass).sum();
        if total_mass == 0.0 {
            return None;
        }
        let weighted = self
            .bodies()
            .iter()
            .fold(SVector::zeros(), |acc: SVector<f64, D>, b| acc + b.position * b.mass);
        Some(weighted / total_mass)
    }
}

impl Simulation3 {
    /// Σ r × (m v) about the origin
    pub fn total_angular_momentum(&self) -> NVec3 {
        self.bodies()
            .iter()
            .map(|b| b.orbital_angular_momentum())
            .fold(NVec3::zeros(), |acc, l| acc + l)
    }
}

impl Simulation2 {
    /// z component of Σ r × (m v)
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies().iter().map(|b| b.orbital_angular_momentum()).sum()
    }
}
