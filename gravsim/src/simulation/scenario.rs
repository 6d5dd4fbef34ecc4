//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! holding the [`Simulation`] with bodies at t = 0 and the number of steps
//! the scenario asks for. [`LoadedScenario`] picks 2D or 3D from the
//! engine section.

use log::{debug, warn};
use nalgebra::SVector;

use crate::configuration::config::{BodyConfig, Dimension, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

#[derive(Debug, Clone)]
pub struct Scenario<const D: usize> {
    pub simulation: Simulation<D>,
    pub steps: usize,
}

pub type Scenario2D = Scenario<2>;
pub type Scenario3D = Scenario<3>;

impl<const D: usize> Scenario<D> {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        if cfg.engine.dimension.components() != D {
            warn!(
                "scenario declares {:?} but is being built as {}d",
                cfg.engine.dimension, D
            );
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(build_body::<D>)
            .collect::<Result<Vec<_>, _>>()?;

        let parameters = Parameters {
            G: cfg.parameters.G,
            dt: cfg.parameters.dt,
        };

        debug!("built {}d scenario with {} bodies", D, bodies.len());

        Ok(Self {
            simulation: Simulation::new(bodies, parameters),
            steps: cfg.parameters.steps,
        })
    }
}

/// A scenario in whichever dimension its configuration asks for
#[derive(Debug, Clone)]
pub enum LoadedScenario {
    TwoD(Scenario2D),
    ThreeD(Scenario3D),
}

impl LoadedScenario {
    pub fn build(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        Ok(match cfg.engine.dimension {
            Dimension::Two => LoadedScenario::TwoD(Scenario::build_scenario(cfg)?),
            Dimension::Three => LoadedScenario::ThreeD(Scenario::build_scenario(cfg)?),
        })
    }
}

fn build_body<const D: usize>(bc: &BodyConfig) -> Result<Body<D>, ConfigError> {
    let mut body = Body::new(bc.id.as_str(), bc.name.as_str(), bc.mass)
        .with_position(vector::<D>(bc, "position", bc.position.as_deref())?)
        .with_velocity(vector::<D>(bc, "velocity", bc.velocity.as_deref())?);

    if let Some(radius) = bc.radius {
        body = body.with_radius(radius);
    }
    if let Some(color) = &bc.color {
        body = body.with_color(color.as_str());
    }
    body.inclination = bc.inclination;

    Ok(body)
}

fn vector<const D: usize>(
    bc: &BodyConfig,
    field: &'static str,
    values: Option<&[f64]>,
) -> Result<SVector<f64, D>, ConfigError> {
    match values {
        None => Ok(SVector::zeros()),
        Some(v) if v.len() == D => Ok(SVector::from_column_slice(v)),
        Some(v) => Err(ConfigError::DimensionMismatch {
            body: bc.id.clone(),
            field,
            expected: D,
            found: v.len(),
        }),
    }
}
