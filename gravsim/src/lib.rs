pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{ConfigError, PhysicsError};

pub use simulation::vector::{VectorExt, project_to_2d, lift_to_3d};
pub use simulation::states::{Body, Body2, Body3, BodyId, NVec2, NVec3};
pub use simulation::params::{Parameters, G_SI, DEFAULT_DT};
pub use simulation::forces::{
    NewtonianGravity, force_between_bodies, gravitational_force_magnitude, gravitational_force_vector,
    total_force_on_body,
};
pub use simulation::integrator::integrate;
pub use simulation::engine::{Simulation, Simulation2, Simulation3, SimulationState};
pub use simulation::collisions::{CollisionPair, are_colliding};
pub use simulation::runner::Runner;
pub use simulation::scenario::{LoadedScenario, Scenario, Scenario2D, Scenario3D};

pub use configuration::config::{BodyConfig, Dimension, EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
