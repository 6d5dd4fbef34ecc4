//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`,
//! - fixed step size `dt` in seconds

/// Newtonian gravitational constant, m³ kg⁻¹ s⁻²
pub const G_SI: f64 = 6.67430e-11;

/// Default step: one hour
pub const DEFAULT_DT: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub G: f64,  // gravitational constant
    pub dt: f64, // step size (s)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            dt: DEFAULT_DT,
        }
    }
}
