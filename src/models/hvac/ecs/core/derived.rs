use uom::si::{
    f64::{MassRate, Power, Ratio, ThermalConductance},
    ratio::ratio,
};

use crate::support::{constraint::NonZero, psychro::Psychrometrics, units::TemperatureDifference};

use super::{EcsConfig, EcsError, EcsInput};

/// Scalars derived from the input before the balance system is assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Total supply mass flow, `m = m_fresh / α`.
    pub total_flow: MassRate,

    /// Sensible load the supply air must remove from the zone,
    /// `QsZ = −m·c·(θS − θIsp)`.
    pub zone_sensible_load: Power,

    /// Envelope conductance, `UA = (QsZ − Qsa) / (θ_ext − θIsp)`.
    pub envelope_ua: ThermalConductance,

    /// Humidity ratio after the turbine.
    pub turbine_humidity_ratio: Ratio,

    /// Humidity ratio at the indoor setpoint.
    pub indoor_humidity_ratio: Ratio,
}

impl Derived {
    /// Computes the derived scalars.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DegenerateInput`] if the mixing ratio is zero or
    /// the external temperature equals the indoor setpoint, and
    /// [`EcsError::Psychro`] if a humidity ratio cannot be evaluated.
    pub fn new(
        input: &EcsInput,
        config: &EcsConfig,
        psychro: &impl Psychrometrics,
    ) -> Result<Self, EcsError> {
        let alpha = NonZero::new(input.mixing_ratio)
            .map_err(EcsError::degenerate("mixing ratio"))?
            .into_inner();
        let total_flow = input.fresh_air / alpha.get::<ratio>();

        let supply_delta_t = input.supply_temp.minus(input.indoor_temp_setpoint);
        let zone_sensible_load: Power = -(total_flow * config.specific_heat * supply_delta_t);

        let envelope_delta_t = NonZero::new(input.external_temp.minus(input.indoor_temp_setpoint))
            .map_err(EcsError::degenerate("external minus indoor setpoint temperature"))?
            .into_inner();
        let envelope_ua: ThermalConductance =
            (zone_sensible_load - input.aux_sensible) / envelope_delta_t;

        let turbine_humidity_ratio = psychro.humidity_ratio(input.turbine_temp, input.turbine_rh)?;
        let indoor_humidity_ratio =
            psychro.humidity_ratio(input.indoor_temp_setpoint, input.indoor_rh_setpoint)?;

        Ok(Self {
            total_flow,
            zone_sensible_load,
            envelope_ua,
            turbine_humidity_ratio,
            indoor_humidity_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, power::watt, thermal_conductance::watt_per_kelvin,
    };

    use crate::support::{
        constraint::ConstraintError,
        psychro::{MoistAir, PsychroError},
    };

    use super::super::test_support::{celsius, nominal_input};

    #[test]
    fn nominal_scalars() {
        let derived = Derived::new(&nominal_input(), &EcsConfig::default(), &MoistAir::default())
            .unwrap();

        assert_relative_eq!(derived.total_flow.get::<kilogram_per_second>(), 2.0);
        assert_relative_eq!(
            derived.zone_sensible_load.get::<watt>(),
            12_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            derived.envelope_ua.get::<watt_per_kelvin>(),
            11_500.0 / 11.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            derived.indoor_humidity_ratio.get::<ratio>(),
            0.009_298_5,
            max_relative = 1e-5
        );
    }

    #[test]
    fn without_aux_heat_ua_is_zone_load_over_delta_t() {
        let input = EcsInput {
            aux_sensible: Power::new::<watt>(0.0),
            aux_latent: Power::new::<watt>(0.0),
            ..nominal_input()
        };
        let derived =
            Derived::new(&input, &EcsConfig::default(), &MoistAir::default()).unwrap();

        let delta_t = input.external_temp.minus(input.indoor_temp_setpoint);
        let expected: ThermalConductance = derived.zone_sensible_load / delta_t;
        assert_eq!(derived.envelope_ua, expected);
    }

    #[test]
    fn zero_mixing_ratio_is_degenerate() {
        let input = EcsInput {
            mixing_ratio: Ratio::new::<ratio>(0.0),
            ..nominal_input()
        };
        let err = Derived::new(&input, &EcsConfig::default(), &MoistAir::default()).unwrap_err();

        assert!(matches!(
            err,
            EcsError::DegenerateInput {
                quantity: "mixing ratio",
                source: ConstraintError::Zero,
            }
        ));
    }

    #[test]
    fn external_temperature_at_setpoint_is_degenerate() {
        let input = EcsInput {
            external_temp: celsius(24.0),
            ..nominal_input()
        };
        let err = Derived::new(&input, &EcsConfig::default(), &MoistAir::default()).unwrap_err();

        assert!(matches!(
            err,
            EcsError::DegenerateInput {
                source: ConstraintError::Zero,
                ..
            }
        ));
    }

    #[test]
    fn psychro_failures_propagate() {
        let input = EcsInput {
            turbine_rh: Ratio::new::<ratio>(1.2),
            ..nominal_input()
        };
        let err = Derived::new(&input, &EcsConfig::default(), &MoistAir::default()).unwrap_err();

        assert!(matches!(
            err,
            EcsError::Psychro(PsychroError::RelativeHumidity { .. })
        ));
    }
}
