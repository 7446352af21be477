//! Psychrometric capabilities used by air-conditioning models.
//!
//! Models in this crate only need two things from psychrometrics:
//!
//! - converting a temperature and relative humidity into a humidity ratio,
//!   expressed by the [`Psychrometrics`] trait, and
//! - drawing a process path on a psychrometric chart, expressed by the
//!   [`ChartRenderer`] trait.
//!
//! Both are capabilities that a caller can swap out.
//! [`MoistAir`] is the default property model.
//! [`NoChart`] and [`CsvChart`] are the provided chart backends.

mod chart;
mod error;
mod moist_air;

pub use chart::{ChartError, ChartRenderer, CsvChart, Incidence, NoChart, ProcessPath, Segment};
pub use error::PsychroError;
pub use moist_air::MoistAir;

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Humidity ratio capability.
pub trait Psychrometrics {
    /// Returns the humidity ratio `w` (kg water vapor per kg dry air) of moist
    /// air at `temperature` and `relative_humidity`.
    ///
    /// # Errors
    ///
    /// Returns a [`PsychroError`] if the state is outside the model's domain.
    fn humidity_ratio(
        &self,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Ratio, PsychroError>;
}

impl<T: Psychrometrics + ?Sized> Psychrometrics for &T {
    fn humidity_ratio(
        &self,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Ratio, PsychroError> {
        (**self).humidity_ratio(temperature, relative_humidity)
    }
}

/// A point on the psychrometric chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    /// Dry-bulb temperature.
    pub temperature: ThermodynamicTemperature,

    /// Humidity ratio, kg water vapor per kg dry air.
    pub humidity_ratio: Ratio,
}

impl AirState {
    /// Creates a state from a temperature in °C and a humidity ratio in kg/kg.
    #[must_use]
    pub fn from_celsius(temperature: f64, humidity_ratio: f64) -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature),
            humidity_ratio: Ratio::new::<ratio>(humidity_ratio),
        }
    }

    /// Dry-bulb temperature in °C.
    #[must_use]
    pub fn celsius(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }

    /// Humidity ratio in g/kg, the usual chart scale.
    #[must_use]
    pub fn grams_per_kilogram(&self) -> f64 {
        1000.0 * self.humidity_ratio.get::<ratio>()
    }
}
