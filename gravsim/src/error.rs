//! Error types for the physics core and the scenario layer

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Failures raised by the numerical core
///
/// Every variant is a programming or input error. Nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhysicsError {
    /// Scalar division by exactly zero (vector division, force magnitude at
    /// zero distance, integrating a zero-mass body)
    #[error("division by zero")]
    ZeroDivisor,

    /// Two bodies share an exact position, so their potential energy is undefined
    #[error("bodies `{first}` and `{second}` occupy the same position")]
    CoincidentBodies { first: BodyId, second: BodyId },
}

/// Failures while turning a scenario file into a simulation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body `{body}`: `{field}` has {found} components, expected {expected}")]
    DimensionMismatch {
        body: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },
}
