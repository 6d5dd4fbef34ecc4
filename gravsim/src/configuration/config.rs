//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – dimension of the run (2D or 3D)
//! - [`ParametersConfig`] – gravitational constant, step size and step count
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 3D scenario matching these types:
//!
//! ```yaml
//! engine:
//!   dimension: 3d           # "2d" or "3d"
//!
//! parameters:
//!   G: 6.6743e-11           # optional, SI value when omitted
//!   dt: 86400.0             # optional step size in seconds
//!   steps: 365              # default number of steps for the CLI
//!
//! bodies:
//!   - id: sun
//!     name: Sun
//!     mass: 1.989e30
//!     radius: 6.96e8
//!   - id: earth
//!     name: Earth
//!     mass: 5.972e24
//!     position: [1.496e11, 0.0, 0.0]
//!     velocity: [0.0, 29780.0, 0.0]
//!     radius: 6.371e6
//!     color: "#2a6fdb"
//! ```
//!
//! Omitted body fields take the same defaults as [`crate::Body::new`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::params::{DEFAULT_DT, G_SI};

/// Spatial dimension of a scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    #[serde(rename = "2d")]
    Two,
    #[default]
    #[serde(rename = "3d")]
    Three,
}

impl Dimension {
    pub fn components(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub dimension: Dimension, // 2d or 3d vectors throughout
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_dt")]
    pub dt: f64, // time step size (s)
    #[serde(default = "default_steps")]
    pub steps: usize, // steps for a batch run
}

fn default_g() -> f64 {
    G_SI
}

fn default_dt() -> f64 {
    DEFAULT_DT
}

fn default_steps() -> usize {
    100
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: default_g(),
            dt: default_dt(),
            steps: default_steps(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub id: String,                  // unique identifier
    pub name: String,                // display label
    pub mass: f64,                   // kg
    pub position: Option<Vec<f64>>,  // m, origin when omitted
    pub velocity: Option<Vec<f64>>,  // m/s, at rest when omitted
    pub radius: Option<f64>,         // m, collision radius
    pub color: Option<String>,       // cosmetic
    pub inclination: Option<f64>,    // cosmetic orbital metadata
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Engine-level configuration
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_default_when_omitted() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - id: a\n    name: A\n    mass: 1.0\n",
        )
        .unwrap();

        assert_eq!(cfg.engine.dimension, Dimension::Three);
        assert_eq!(cfg.parameters.G, G_SI);
        assert_eq!(cfg.parameters.dt, DEFAULT_DT);
        assert_eq!(cfg.bodies.len(), 1);
        assert!(cfg.bodies[0].position.is_none());
    }

    #[test]
    fn dimension_parses_2d() {
        let cfg = ScenarioConfig::from_yaml_str(
            "engine:\n  dimension: 2d\nparameters:\n  G: 1.0\n  dt: 0.5\n  steps: 3\nbodies: []\n",
        )
        .unwrap();

        assert_eq!(cfg.engine.dimension, Dimension::Two);
        assert_eq!(cfg.parameters.G, 1.0);
        assert_eq!(cfg.parameters.steps, 3);
    }
}
