//! Results of an ECS balance solve.

use nalgebra::SVector;
use uom::si::{f64::Power, power::watt};

use crate::support::psychro::{AirState, ProcessPath};

use super::{
    BalanceSystem, Derived, NODES, Report, UNKNOWNS,
    system::{QL_TZ, QL_VH, QS_HC, QS_TZ},
};

/// Process stages of the loop, named after the component whose outlet they
/// describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mixing box outlet.
    Mixing,
    /// Heating coil outlet.
    Heating,
    /// Vapor humidifier outlet.
    Humidifying,
    /// Thermal zone outlet, which is also the recirculated air.
    Zone,
}

impl Stage {
    /// All stages in flow order.
    pub const ALL: [Stage; 4] = [Stage::Mixing, Stage::Heating, Stage::Humidifying, Stage::Zone];

    /// Index of the stage temperature in the solution vector.
    ///
    /// The humidity ratio follows at the next index.
    #[must_use]
    pub fn offset(self) -> usize {
        2 * self as usize
    }
}

/// The solved unknown vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution(SVector<f64, UNKNOWNS>);

impl Solution {
    pub(super) fn new(x: SVector<f64, UNKNOWNS>) -> Self {
        Self(x)
    }

    #[must_use]
    pub fn vector(&self) -> &SVector<f64, UNKNOWNS> {
        &self.0
    }

    /// Raw values: temperatures in °C, humidity ratios in kg/kg, duties in W.
    #[must_use]
    pub fn to_array(&self) -> [f64; UNKNOWNS] {
        let mut values = [0.0; UNKNOWNS];
        values.copy_from_slice(self.0.as_slice());
        values
    }

    #[must_use]
    pub fn state(&self, stage: Stage) -> AirState {
        let i = stage.offset();
        AirState::from_celsius(self.0[i], self.0[i + 1])
    }

    #[must_use]
    pub fn duties(&self) -> Duties {
        Duties {
            heating_coil: Power::new::<watt>(self.0[QS_HC]),
            humidifier: Power::new::<watt>(self.0[QL_VH]),
            zone_sensible: Power::new::<watt>(self.0[QS_TZ]),
            zone_latent: Power::new::<watt>(self.0[QL_TZ]),
        }
    }
}

/// Heat duties of the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duties {
    /// Sensible heating coil duty `QsHC`.
    pub heating_coil: Power,
    /// Latent vapor humidifier duty `QlVH`.
    pub humidifier: Power,
    /// Sensible zone load `QsTZ`.
    pub zone_sensible: Power,
    /// Latent zone load `QlTZ`.
    pub zone_latent: Power,
}

impl Duties {
    /// Duties in kW, in the order `QsHC, QlVH, QsTZ, QlTZ`.
    #[must_use]
    pub fn kilowatts(&self) -> [f64; 4] {
        [
            self.heating_coil,
            self.humidifier,
            self.zone_sensible,
            self.zone_latent,
        ]
        .map(|q| q.get::<watt>() * 0.001)
    }
}

/// Everything produced by one balance solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcsResults {
    pub solution: Solution,
    pub derived: Derived,
    pub system: BalanceSystem,

    /// Turbine exit followed by the four stage outlets.
    pub path: ProcessPath<NODES>,
}

impl EcsResults {
    /// Human-readable summary of the state points, duties, and envelope UA.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}
