//! Simulation driver
//!
//! [`Simulation`] owns the body collection together with `G`, `dt` and the
//! elapsed time, and advances everything one step at a time. Rendering and
//! UI layers read it only through [`Simulation::state`] snapshots.

use log::{debug, trace};
use serde::Serialize;

use crate::error::PhysicsError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId};

/// Deep copy of the simulation at one instant
///
/// Owns its bodies, so mutating it never reaches the live simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(non_snake_case)]
pub struct SimulationState<const D: usize> {
    pub bodies: Vec<Body<D>>,
    pub time: f64, // elapsed simulated seconds
    pub G: f64,
    pub dt: f64,
}

#[derive(Debug, Clone)]
pub struct Simulation<const D: usize> {
    bodies: Vec<Body<D>>,
    gravity: NewtonianGravity,
    dt: f64,
    time: f64,
    is_running: bool,
}

pub type Simulation2 = Simulation<2>;
pub type Simulation3 = Simulation<3>;

impl<const D: usize> Default for Simulation<D> {
    fn default() -> Self {
        Self::new(Vec::new(), Parameters::default())
    }
}

impl<const D: usize> Simulation<D> {
    pub fn new(bodies: Vec<Body<D>>, parameters: Parameters) -> Self {
        debug!(
            "new {}d simulation: {} bodies, G = {:e}, dt = {} s",
            D,
            bodies.len(),
            parameters.G,
            parameters.dt
        );
        Self {
            bodies,
            gravity: NewtonianGravity::new(parameters.G),
            dt: parameters.dt,
            time: 0.0,
            is_running: false,
        }
    }

    /// Default `G` and `dt`
    pub fn with_bodies(bodies: Vec<Body<D>>) -> Self {
        Self::new(bodies, Parameters::default())
    }

    pub fn bodies(&self) -> &[Body<D>] {
        &self.bodies
    }

    /// First body carrying `id`
    pub fn body(&self, id: &BodyId) -> Option<&Body<D>> {
        self.bodies.iter().find(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn g(&self) -> f64 {
        self.gravity.G
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    pub fn add_body(&mut self, body: Body<D>) {
        trace!("add body `{}`", body.id);
        self.bodies.push(body);
    }

    /// Remove the first body with `id`, returns whether one was removed
    pub fn remove_body(&mut self, id: &BodyId) -> bool {
        match self.bodies.iter().position(|b| &b.id == id) {
            Some(idx) => {
                self.bodies.remove(idx);
                trace!("removed body `{}`", id);
                true
            }
            None => false,
        }
    }

    /// Advance every body by one `dt`
    ///
    /// All forces are computed from the pre-step positions before any body
    /// moves. A zero-mass body fails the whole step with
    /// [`PhysicsError::ZeroDivisor`] and leaves the simulation unchanged.
    pub fn step(&mut self) -> Result<(), PhysicsError> {
        // Phase 1: forces from a consistent snapshot of positions
        let forces = self.gravity.forces(&self.bodies);

        if self.bodies.iter().any(|b| b.mass == 0.0) {
            return Err(PhysicsError::ZeroDivisor);
        }

        // Phase 2: integrate each body with its stored force
        for body in self.bodies.iter_mut() {
            if let Some(force) = forces.get(&body.id) {
                integrate(body, force, self.dt)?;
            }
        }

        self.time += self.dt;
        trace!("step done, t = {} s", self.time);
        Ok(())
    }

    /// Run `steps` sequential steps, stopping at the first error
    pub fn simulate(&mut self, steps: usize) -> Result<(), PhysicsError> {
        debug!("simulating {} steps from t = {} s", steps, self.time);
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// Independent copy of bodies, time, `G` and `dt`
    pub fn state(&self) -> SimulationState<D> {
        SimulationState {
            bodies: self.bodies.clone(),
            time: self.time,
            G: self.gravity.G,
            dt: self.dt,
        }
    }

    /// Zero the elapsed time and clear the running flag
    ///
    /// Body positions and velocities are left as they are; rebuild the
    /// bodies for a full reset.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.is_running = false;
    }
}
