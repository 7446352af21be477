use std::cell::RefCell;

use uom::si::{
    f64::{MassRate, Power, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::{ChartError, ChartRenderer, Incidence, ProcessPath};

use super::EcsInput;

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Cooling-dominated cruise point: 1 kg/s fresh air, half recirculated.
pub(crate) fn nominal_input() -> EcsInput {
    EcsInput {
        fresh_air: MassRate::new::<kilogram_per_second>(1.0),
        mixing_ratio: Ratio::new::<ratio>(0.5),
        supply_temp: celsius(18.0),
        indoor_temp_setpoint: celsius(24.0),
        indoor_rh_setpoint: Ratio::new::<ratio>(0.5),
        turbine_temp: celsius(5.0),
        turbine_rh: Ratio::new::<ratio>(0.9),
        external_temp: celsius(35.0),
        aux_sensible: Power::new::<watt>(500.0),
        aux_latent: Power::new::<watt>(200.0),
    }
}

/// Chart backend that records the node temperatures of every render.
#[derive(Debug, Default)]
pub(crate) struct RecordingChart {
    pub(crate) renders: RefCell<Vec<Vec<f64>>>,
}

impl ChartRenderer for RecordingChart {
    fn render<const S: usize, const N: usize>(
        &self,
        path: &ProcessPath<N>,
        _incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError> {
        self.renders.borrow_mut().push(path.temperatures().to_vec());
        Ok(())
    }
}

/// Chart backend that always fails.
#[derive(Debug, Default)]
pub(crate) struct BrokenChart;

impl ChartRenderer for BrokenChart {
    fn render<const S: usize, const N: usize>(
        &self,
        _path: &ProcessPath<N>,
        _incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError> {
        Err(ChartError::Io(std::io::Error::other("display unavailable")))
    }
}
