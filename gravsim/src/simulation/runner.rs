//! Real-time runner
//!
//! A thin cooperative loop around [`Simulation`]: one step per frame,
//! sleeping between frames. Stopping clears the running flag so no further
//! step is taken. A step that has started always completes.

use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::error::PhysicsError;
use crate::simulation::engine::{Simulation, SimulationState};

pub struct Runner<const D: usize> {
    simulation: Simulation<D>,
}

impl<const D: usize> Runner<D> {
    pub fn new(simulation: Simulation<D>) -> Self {
        Self { simulation }
    }

    pub fn simulation(&self) -> &Simulation<D> {
        &self.simulation
    }

    pub fn into_simulation(self) -> Simulation<D> {
        self.simulation
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn start(&mut self) {
        debug!("runner started at t = {} s", self.simulation.time());
        self.simulation.set_running(true);
    }

    pub fn stop(&mut self) {
        debug!("runner stopped at t = {} s", self.simulation.time());
        self.simulation.set_running(false);
    }

    /// One frame: step once if running, returns whether a step was taken
    pub fn tick(&mut self) -> Result<bool, PhysicsError> {
        if !self.simulation.is_running() {
            return Ok(false);
        }
        if let Err(err) = self.simulation.step() {
            self.stop();
            return Err(err);
        }
        Ok(true)
    }

    /// Start and drive up to `max_frames` frames, `frame_interval` apart
    ///
    /// `on_frame` sees a snapshot after every step and stops the loop by
    /// returning `ControlFlow::Break`. Returns the number of steps taken.
    pub fn run<F>(&mut self, frame_interval: Duration, max_frames: usize, mut on_frame: F) -> Result<usize, PhysicsError>
    where
        F: FnMut(&SimulationState<D>) -> ControlFlow<()>,
    {
        self.start();
        let mut frames = 0;

        while frames < max_frames && self.tick()? {
            frames += 1;
            if on_frame(&self.simulation.state()).is_break() {
                self.stop();
                break;
            }
            if frames < max_frames && !frame_interval.is_zero() {
                thread::sleep(frame_interval);
            }
        }

        if self.is_running() {
            self.stop();
        }
        info!("runner finished after {} frames", frames);
        Ok(frames)
    }
}
