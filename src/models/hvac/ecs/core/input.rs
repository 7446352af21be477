use uom::si::f64::{MassRate, Power, Ratio, ThermodynamicTemperature};

/// Operating point of an ECS air-conditioning loop.
///
/// Values are taken as given. Only the two quantities that end up as divisors
/// are checked, when the model derives its balance coefficients (see
/// [`EcsError::DegenerateInput`](super::EcsError::DegenerateInput)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcsInput {
    /// Fresh-air mass flow delivered by the air cycle machine.
    pub fresh_air: MassRate,

    /// Mixing ratio `α`, the fresh-air fraction of the supply flow (`0 < α ≤ 1`).
    ///
    /// `α = 1` means no recirculation.
    pub mixing_ratio: Ratio,

    /// Supply-air temperature `θS` entering the zone.
    pub supply_temp: ThermodynamicTemperature,

    /// Indoor temperature setpoint `θIsp`.
    pub indoor_temp_setpoint: ThermodynamicTemperature,

    /// Indoor relative humidity setpoint `φIsp`.
    pub indoor_rh_setpoint: Ratio,

    /// Air temperature after the cooling turbine.
    pub turbine_temp: ThermodynamicTemperature,

    /// Relative humidity after the cooling turbine.
    pub turbine_rh: Ratio,

    /// External static air temperature.
    pub external_temp: ThermodynamicTemperature,

    /// Auxiliary sensible heat released in the zone (occupants, avionics).
    pub aux_sensible: Power,

    /// Auxiliary latent heat released in the zone.
    pub aux_latent: Power,
}
