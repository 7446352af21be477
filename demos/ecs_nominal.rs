//! Solves the nominal cruise point and exports the process path as CSV.
//!
//! Debug events from the solver are printed through the fmt subscriber.
//!
//! ```sh
//! cargo run --example ecs_nominal
//! ```

use std::{error::Error, io};

use ecs_models::{
    models::hvac::ecs::{EcsBalance, EcsConfig, EcsInput},
    support::psychro::{CsvChart, MoistAir},
};
use uom::si::{
    f64::{MassRate, Power, Ratio, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let celsius = ThermodynamicTemperature::new::<degree_celsius>;
    let input = EcsInput {
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
    };

    let chart = CsvChart::new(std::env::temp_dir().join("ecs_nominal_path.csv"));
    let chart_file = chart.path().to_path_buf();

    let model = EcsBalance::new(EcsConfig::default(), MoistAir::default(), chart);
    let x = model.run(&input, &mut io::stdout().lock())?;

    println!();
    println!("unknowns: {x:.4?}");
    println!("process path written to {}", chart_file.display());
    Ok(())
}
