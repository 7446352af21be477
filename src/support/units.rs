//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, power,
//! mass flow). This module provides the pieces that are useful for modeling
//! but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and returns a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use ecs_models::support::units::TemperatureDifference;
//!
//! let outside = ThermodynamicTemperature::new::<degree_celsius>(35.0);
//! let cabin = ThermodynamicTemperature::new::<degree_celsius>(24.0);
//! let delta_t = outside.minus(cabin);
//! assert_eq!(delta_t.get::<temperature_interval::kelvin>().round(), 11.0);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
