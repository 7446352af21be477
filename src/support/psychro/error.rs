use thiserror::Error;
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors that may occur when evaluating psychrometric properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// The relative humidity is not within `0 ≤ φ ≤ 1`.
    #[error("invalid relative humidity {value:?}")]
    RelativeHumidity {
        value: Ratio,
        #[source]
        source: ConstraintError,
    },

    /// The temperature is outside the range of the saturation pressure correlation.
    #[error("temperature out of domain: {temperature:?}")]
    OutOfDomain { temperature: ThermodynamicTemperature },

    /// The water vapor partial pressure reaches the total pressure.
    ///
    /// No finite humidity ratio exists for this state.
    #[error("vapor pressure {vapor_pressure:?} is not below total pressure {total_pressure:?}")]
    Saturated {
        vapor_pressure: Pressure,
        total_pressure: Pressure,
    },
}
