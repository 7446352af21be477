use uom::si::{
    available_energy::joule_per_kilogram, f64::SpecificHeatCapacity,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::units::SpecificEnthalpy;

/// Constants of the ECS balance equations.
///
/// The defaults reproduce the reference air-conditioning model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcsConfig {
    /// Specific heat of air.
    pub specific_heat: SpecificHeatCapacity,

    /// Latent heat of vaporization of water.
    pub latent_heat: SpecificEnthalpy,

    /// Gain of the indoor temperature controller, W/K.
    ///
    /// A very large proportional gain idealizes a controller that holds the
    /// zone exactly at its setpoint. The residual tracking error is
    /// `QsHC / Kt`.
    pub temperature_gain: f64,

    /// Gain of the indoor humidity controller, W per unit humidity ratio.
    ///
    /// The residual tracking error is `QlVH / Kw`.
    pub humidity_gain: f64,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1e3),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(2496e3),
            temperature_gain: 1e10,
            humidity_gain: 1e10,
        }
    }
}
