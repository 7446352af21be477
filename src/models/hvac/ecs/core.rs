//! Steady-state balance of an ECS air-conditioning loop.
//!
//! ```text
//!          <-TZ-|<-----------------------|
//!               |                        |
//!  -turbine->  MX --0-> HC --1-> VH --2-> TZ --3-->
//!                      /        /    ||  |
//!                      |        |    BL  |
//!                      |        |<---Kw--| w3
//!                      |<-----------Kt---| θ3
//! ```
//!
//! Six balances (mixing box, heating coil, vapor humidifier, thermal zone,
//! envelope, controllers) each contribute a sensible and a latent row to a
//! 12×12 linear system, which is solved directly.

mod config;
mod derived;
mod error;
mod input;
mod path;
mod report;
mod results;
mod system;

#[cfg(test)]
pub(super) mod test_support;

pub use config::EcsConfig;
pub use derived::Derived;
pub use error::EcsError;
pub use input::EcsInput;
pub use path::{INCIDENCE, NODE_LABELS, NODES, PROCESSES};
pub use report::Report;
pub use results::{Duties, EcsResults, Solution, Stage};
pub use system::BalanceSystem;

use tracing::debug;
use uom::si::{
    mass_rate::kilogram_per_second, power::watt, thermal_conductance::watt_per_kelvin,
};

use crate::support::psychro::{AirState, Psychrometrics};

use path::process_path;

/// Number of unknowns (and equations) in the balance system.
pub const UNKNOWNS: usize = 12;

/// Solves the loop balance at one operating point.
///
/// # Errors
///
/// Returns [`EcsError::DegenerateInput`] for a zero mixing ratio or an
/// external temperature equal to the indoor setpoint,
/// [`EcsError::Psychro`] if a humidity ratio cannot be evaluated, and
/// [`EcsError::SingularSystem`] if the assembled matrix cannot be inverted.
pub(super) fn solve(
    input: &EcsInput,
    config: &EcsConfig,
    psychro: &impl Psychrometrics,
) -> Result<EcsResults, EcsError> {
    let derived = Derived::new(input, config, psychro)?;
    debug!(
        total_flow_kg_s = derived.total_flow.get::<kilogram_per_second>(),
        zone_sensible_load_w = derived.zone_sensible_load.get::<watt>(),
        envelope_ua_w_k = derived.envelope_ua.get::<watt_per_kelvin>(),
        "derived loop scalars"
    );

    let system = BalanceSystem::assemble(input, &derived, config);
    let x = system.solve()?;
    debug!(
        max_scaled_residual = system.max_scaled_residual(&x),
        "balance system solved"
    );

    let solution = Solution::new(x);
    let turbine = AirState {
        temperature: input.turbine_temp,
        humidity_ratio: derived.turbine_humidity_ratio,
    };
    let path = process_path(turbine, &solution);

    Ok(EcsResults {
        solution,
        derived,
        system,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{MassRate, Power, Ratio},
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::psychro::MoistAir;

    use super::test_support::{celsius, nominal_input};

    fn solve_nominal(input: &EcsInput) -> EcsResults {
        solve(input, &EcsConfig::default(), &MoistAir::default()).unwrap()
    }

    #[test]
    fn nominal_cooling_case() {
        let input = nominal_input();
        let results = solve_nominal(&input);
        let solution = results.solution;

        let mixed = solution.state(Stage::Mixing);
        assert!(mixed.temperature <= input.indoor_temp_setpoint);
        assert_relative_eq!(mixed.celsius(), 14.5, epsilon = 1e-5);

        // The coil only reheats to the supply temperature; the humidifier keeps it.
        assert_relative_eq!(solution.state(Stage::Heating).celsius(), 18.0, epsilon = 1e-5);
        assert_relative_eq!(
            solution.state(Stage::Humidifying).celsius(),
            18.0,
            epsilon = 1e-5
        );

        let duties = solution.duties();
        assert_relative_eq!(duties.heating_coil.get::<watt>(), 7000.0, max_relative = 1e-6);
        assert_relative_eq!(duties.zone_sensible.get::<watt>(), 12_000.0, max_relative = 1e-6);
        assert_relative_eq!(duties.zone_latent.get::<watt>(), 200.0, max_relative = 1e-9);
        assert!(duties.humidifier.get::<watt>() > 0.0);

        let ua = results.derived.envelope_ua.get::<watt_per_kelvin>();
        assert!(ua.is_finite() && ua > 0.0);
    }

    #[test]
    fn controllers_hold_the_setpoints() {
        let results = solve_nominal(&nominal_input());
        let x = results.solution.to_array();
        let w_isp = results.derived.indoor_humidity_ratio.get::<ratio>();

        assert!((x[6] - 24.0).abs() < 1e-6);
        assert!((x[7] - w_isp).abs() < 1e-5);

        // With a finite gain the tracking error is exactly duty / gain.
        let config = EcsConfig::default();
        assert_relative_eq!(
            24.0 - x[6],
            x[8] / config.temperature_gain,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            w_isp - x[7],
            x[9] / config.humidity_gain,
            max_relative = 1e-6
        );
    }

    #[test]
    fn no_recirculation_passes_turbine_air_through_the_mixer() {
        let input = EcsInput {
            mixing_ratio: Ratio::new::<ratio>(1.0),
            ..nominal_input()
        };
        let results = solve_nominal(&input);
        let mixed = results.solution.state(Stage::Mixing);

        assert_relative_eq!(
            mixed.celsius(),
            input.turbine_temp.get::<degree_celsius>(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mixed.humidity_ratio.get::<ratio>(),
            results.derived.turbine_humidity_ratio.get::<ratio>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn loop_heat_matches_fresh_air_enthalpy_rise() {
        let input = nominal_input();
        let results = solve_nominal(&input);
        let config = EcsConfig::default();
        let duties = results.solution.duties();

        let m_fresh = input.fresh_air.get::<kilogram_per_second>();
        let c = config.specific_heat.get::<joule_per_kilogram_kelvin>();
        let l = config
            .latent_heat
            .get::<uom::si::available_energy::joule_per_kilogram>();

        let zone = results.solution.state(Stage::Zone);
        let sensible_rise = m_fresh * c * (zone.celsius() - 5.0);
        let latent_rise = m_fresh
            * l
            * (zone.humidity_ratio.get::<ratio>()
                - results.derived.turbine_humidity_ratio.get::<ratio>());

        assert_relative_eq!(
            sensible_rise,
            (duties.heating_coil + duties.zone_sensible).get::<watt>(),
            max_relative = 1e-8
        );
        assert_relative_eq!(
            latent_rise,
            (duties.humidifier + duties.zone_latent).get::<watt>(),
            max_relative = 1e-8
        );
    }

    #[test]
    fn no_fresh_air_is_a_singular_balance() {
        let input = EcsInput {
            fresh_air: MassRate::new::<kilogram_per_second>(0.0),
            ..nominal_input()
        };
        let err = solve(&input, &EcsConfig::default(), &MoistAir::default()).unwrap_err();
        assert!(matches!(err, EcsError::SingularSystem { .. }));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let input = nominal_input();
        assert_eq!(solve_nominal(&input), solve_nominal(&input));
    }

    #[test]
    fn path_starts_at_turbine_exit() {
        let input = nominal_input();
        let results = solve_nominal(&input);

        assert_eq!(results.path.nodes[0].temperature, input.turbine_temp);
        assert_eq!(
            results.path.nodes[0].humidity_ratio,
            results.derived.turbine_humidity_ratio
        );
        assert_eq!(results.path.nodes[4], results.solution.state(Stage::Zone));
    }

    proptest! {
        #[test]
        fn solution_satisfies_every_balance(
            (fresh_air, alpha, supply, setpoint, indoor_rh) in (
                0.1_f64..5.0,
                0.05_f64..=1.0,
                10.0_f64..30.0,
                18.0_f64..28.0,
                0.2_f64..0.8,
            ),
            (turbine, turbine_rh, external, qsa, qla) in (
                -10.0_f64..15.0,
                0.1_f64..=1.0,
                -50.0_f64..50.0,
                0.0_f64..2000.0,
                0.0_f64..1000.0,
            ),
        ) {
            prop_assume!((external - setpoint).abs() > 1.0);

            let input = EcsInput {
                fresh_air: MassRate::new::<kilogram_per_second>(fresh_air),
                mixing_ratio: Ratio::new::<ratio>(alpha),
                supply_temp: celsius(supply),
                indoor_temp_setpoint: celsius(setpoint),
                indoor_rh_setpoint: Ratio::new::<ratio>(indoor_rh),
                turbine_temp: celsius(turbine),
                turbine_rh: Ratio::new::<ratio>(turbine_rh),
                external_temp: celsius(external),
                aux_sensible: Power::new::<watt>(qsa),
                aux_latent: Power::new::<watt>(qla),
            };

            let results = solve(&input, &EcsConfig::default(), &MoistAir::default()).unwrap();
            let residual = results.system.max_scaled_residual(results.solution.vector());
            prop_assert!(residual < 1e-9, "scaled residual {residual}");
        }
    }
}
