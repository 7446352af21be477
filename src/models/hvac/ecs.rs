//! Environmental control system (ECS) air-conditioning loop.
//!
//! [`EcsBalance`] implements [`twine_core::Model`] for a single steady-state
//! operating point of the loop. The computational core is in the internal
//! `core` module.
//!
//! # Example
//!
//! ```
//! use ecs_models::models::hvac::ecs::{EcsBalance, EcsInput};
//! use uom::si::{
//!     f64::{MassRate, Power, Ratio, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//! let input = EcsInput {
//!     fresh_air: MassRate::new::<kilogram_per_second>(1.0),
//!     mixing_ratio: Ratio::new::<ratio>(0.5),
//!     supply_temp: celsius(18.0),
//!     indoor_temp_setpoint: celsius(24.0),
//!     indoor_rh_setpoint: Ratio::new::<ratio>(0.5),
//!     turbine_temp: celsius(5.0),
//!     turbine_rh: Ratio::new::<ratio>(0.9),
//!     external_temp: celsius(35.0),
//!     aux_sensible: Power::new::<watt>(500.0),
//!     aux_latent: Power::new::<watt>(200.0),
//! };
//!
//! let mut report = Vec::new();
//! let model: EcsBalance = EcsBalance::default();
//! let x = model.run(&input, &mut report).unwrap();
//! assert_eq!(x.len(), 12);
//! assert!(String::from_utf8(report).unwrap().contains("UA: 1045"));
//! ```

mod core;

pub use self::core::{
    BalanceSystem, Derived, Duties, EcsConfig, EcsError, EcsInput, EcsResults, INCIDENCE,
    NODE_LABELS, NODES, PROCESSES, Report, Solution, Stage, UNKNOWNS,
};

use std::io::Write;

use tracing::{debug, instrument};
use twine_core::Model;

use crate::support::psychro::{ChartRenderer, MoistAir, NoChart, Psychrometrics};

/// Steady-state ECS balance model.
///
/// Holds the equation constants, the psychrometric model used for humidity
/// ratios, and the chart backend used by [`EcsBalance::run`].
#[derive(Debug, Clone, Default)]
pub struct EcsBalance<P = MoistAir, C = NoChart> {
    config: EcsConfig,
    psychro: P,
    chart: C,
}

impl<P: Psychrometrics, C: ChartRenderer> EcsBalance<P, C> {
    #[must_use]
    pub fn new(config: EcsConfig, psychro: P, chart: C) -> Self {
        Self {
            config,
            psychro,
            chart,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EcsConfig {
        &self.config
    }

    /// Solves the balance without rendering or printing.
    ///
    /// # Errors
    ///
    /// Returns an [`EcsError`] for degenerate inputs, psychrometric failures,
    /// or a singular balance system.
    pub fn solve(&self, input: &EcsInput) -> Result<EcsResults, EcsError> {
        self::core::solve(input, &self.config, &self.psychro)
    }

    /// Solves the balance, renders the process path, and writes the report.
    ///
    /// Returns the raw solution vector: `θ0, w0, θ1, w1, θ2, w2, θ3, w3`
    /// in °C and kg/kg, then `QsHC, QlVH, QsTZ, QlTZ` in W.
    /// Nothing is rendered or written if the solve fails.
    ///
    /// # Errors
    ///
    /// Returns an [`EcsError`] if the solve, the chart backend, or the writer fails.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&self, input: &EcsInput, out: &mut impl Write) -> Result<[f64; UNKNOWNS], EcsError> {
        let results = self.solve(input)?;

        self.chart.render(&results.path, &INCIDENCE)?;
        debug!("process path rendered");

        write!(out, "{}", results.report())?;
        Ok(results.solution.to_array())
    }
}

impl<P: Psychrometrics, C: ChartRenderer> Model for EcsBalance<P, C> {
    type Input = EcsInput;
    type Output = EcsResults;
    type Error = EcsError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
