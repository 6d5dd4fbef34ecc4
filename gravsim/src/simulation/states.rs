//! Core state types for the N-body simulation.
//!
//! Bodies are generic over their dimension `D`:
//! - `Body2` uses `NVec2` (2d)
//! - `Body3` uses `NVec3` (3d)
//!
//! A body is addressed by its [`BodyId`]. The simulation driver owns the
//! collection and mutates bodies in place every step.

use std::fmt;

use nalgebra::{SVector, Vector2, Vector3};
use serde::Serialize;

use crate::simulation::vector::{lift_to_3d, project_to_2d, VectorExt};

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Default collision radius for bodies built without one (m)
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Default display color
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Opaque body identifier
///
/// Uniqueness inside one simulation is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        BodyId(id.to_owned())
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        BodyId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body<const D: usize> {
    pub id: BodyId,
    pub name: String,              // display label
    pub mass: f64,                 // kg
    pub position: SVector<f64, D>, // m
    pub velocity: SVector<f64, D>, // m/s
    pub radius: f64,               // m, collision tests only
    pub color: String,             // cosmetic
    pub inclination: Option<f64>,  // cosmetic orbital metadata
    pub angular_momentum: Option<NVec3>, // cached, not authoritative
}

pub type Body2 = Body<2>;
pub type Body3 = Body<3>;

impl<const D: usize> Body<D> {
    /// Body at rest at the origin with default radius and color
    pub fn new(id: impl Into<BodyId>, name: impl Into<String>, mass: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mass,
            position: SVector::zeros(),
            velocity: SVector::zeros(),
            radius: DEFAULT_RADIUS,
            color: DEFAULT_COLOR.to_owned(),
            inclination: None,
            angular_momentum: None,
        }
    }

    pub fn with_position(mut self, position: SVector<f64, D>) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: SVector<f64, D>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_inclination(mut self, inclination: f64) -> Self {
        self.inclination = Some(inclination);
        self
    }

    pub fn momentum(&self) -> SVector<f64, D> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body<D>) -> f64 {
        self.position.distance_to(&other.position)
    }
}

impl Body3 {
    /// r × (m v) about the origin
    pub fn orbital_angular_momentum(&self) -> NVec3 {
        self.position.cross(&self.momentum())
    }

    /// Recompute the cached angular momentum and return it
    pub fn refresh_angular_momentum(&mut self) -> NVec3 {
        let l = self.orbital_angular_momentum();
        self.angular_momentum = Some(l);
        l
    }

    /// Same body flattened onto the xy plane
    pub fn to_2d(&self) -> Body2 {
        Body2 {
            id: self.id.clone(),
            name: self.name.clone(),
            mass: self.mass,
            position: project_to_2d(&self.position),
            velocity: project_to_2d(&self.velocity),
            radius: self.radius,
            color: self.color.clone(),
            inclination: self.inclination,
            angular_momentum: self.angular_momentum,
        }
    }
}

impl Body2 {
    /// z component of r × (m v)
    pub fn orbital_angular_momentum(&self) -> f64 {
        self.mass * (self.position.x * self.velocity.y - self.position.y * self.velocity.x)
    }

    /// Same body lifted to height `z`, velocity stays in-plane
    pub fn to_3d(&self, z: f64) -> Body3 {
        Body3 {
            id: self.id.clone(),
            name: self.name.clone(),
            mass: self.mass,
            position: lift_to_3d(&self.position, z),
            velocity: lift_to_3d(&self.velocity, 0.0),
            radius: self.radius,
            color: self.color.clone(),
            inclination: self.inclination,
            angular_momentum: self.angular_momentum,
        }
    }
}
