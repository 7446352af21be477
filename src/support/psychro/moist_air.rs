//! Moist air as an ideal mixture of dry air and water vapor.
//!
//! # Assumptions
//!
//! - Dry air and water vapor behave as ideal gases at a fixed total pressure.
//! - Saturation pressure follows the Hyland–Wexler correlation used by ASHRAE
//!   Fundamentals: over ice below 0 °C, over liquid water from 0 °C to 200 °C.
//!
//! The humidity ratio is `w = ε·pv / (p − pv)` with `pv = φ·psat(θ)` and
//! `ε = 0.621945`, the ratio of the molar masses of water and dry air.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitInterval};

use super::{Psychrometrics, PsychroError};

/// Molar mass ratio of water vapor to dry air.
const EPSILON: f64 = 0.621_945;

/// Standard atmosphere at sea level, Pa.
const STANDARD_PRESSURE: f64 = 101_325.0;

/// Lower and upper bound of the saturation correlation, °C.
const MIN_CELSIUS: f64 = -100.0;
const MAX_CELSIUS: f64 = 200.0;

const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843_0e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024_0e-13,
    4.163_501_9,
];

const WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Default [`Psychrometrics`] implementation at a fixed total pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    pressure: Pressure,
}

impl MoistAir {
    /// Creates a moist air model at the given total pressure.
    #[must_use]
    pub fn new(pressure: Constrained<Pressure, StrictlyPositive>) -> Self {
        Self {
            pressure: pressure.into_inner(),
        }
    }

    /// Creates a moist air model at standard sea-level pressure (101 325 Pa).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pressure: Pressure::new::<pascal>(STANDARD_PRESSURE),
        }
    }

    /// Total pressure used by this model.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the saturation pressure of water vapor at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfDomain`] outside −100 °C to 200 °C.
    pub fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PsychroError> {
        let celsius = temperature.get::<degree_celsius>();
        if !(MIN_CELSIUS..=MAX_CELSIUS).contains(&celsius) {
            return Err(PsychroError::OutOfDomain { temperature });
        }

        let t = temperature.get::<kelvin>();
        let ln_p = if celsius < 0.0 {
            let [c1, c2, c3, c4, c5, c6, c7] = ICE;
            c1 / t + c2 + c3 * t + c4 * t.powi(2) + c5 * t.powi(3) + c6 * t.powi(4) + c7 * t.ln()
        } else {
            let [c8, c9, c10, c11, c12, c13] = WATER;
            c8 / t + c9 + c10 * t + c11 * t.powi(2) + c12 * t.powi(3) + c13 * t.ln()
        };

        Ok(Pressure::new::<pascal>(ln_p.exp()))
    }
}

impl Default for MoistAir {
    fn default() -> Self {
        Self::standard()
    }
}

impl Psychrometrics for MoistAir {
    fn humidity_ratio(
        &self,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Ratio, PsychroError> {
        let phi = Constrained::<Ratio, UnitInterval>::new(relative_humidity)
            .map_err(|source| PsychroError::RelativeHumidity {
                value: relative_humidity,
                source,
            })?
            .into_inner();

        let vapor_pressure = self.saturation_pressure(temperature)? * phi.get::<ratio>();
        if vapor_pressure >= self.pressure {
            return Err(PsychroError::Saturated {
                vapor_pressure,
                total_pressure: self.pressure,
            });
        }

        let pv = vapor_pressure.get::<pascal>();
        let p = self.pressure.get::<pascal>();
        Ok(Ratio::new::<ratio>(EPSILON * pv / (p - pv)))
    }
}
