//! Dense 12×12 balance system of the ECS loop.
//!
//! Unknowns, in order:
//!
//! | index | unknown |
//! |-------|---------|
//! | 0, 1  | θ0, w0 after the mixing box |
//! | 2, 3  | θ1, w1 after the heating coil |
//! | 4, 5  | θ2, w2 after the vapor humidifier |
//! | 6, 7  | θ3, w3 after the thermal zone |
//! | 8     | QsHC, sensible heating coil duty |
//! | 9     | QlVH, latent humidifier duty |
//! | 10    | QsTZ, sensible zone load |
//! | 11    | QlTZ, latent zone load |
//!
//! Temperatures are in °C, humidity ratios in kg/kg, duties in W.
//! Each balance owns two consecutive rows: sensible first, then latent.

use nalgebra::{SMatrix, SVector};
use uom::si::{
    available_energy::joule_per_kilogram, mass_rate::kilogram_per_second, power::watt,
    ratio::ratio, specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductance::watt_per_kelvin, thermodynamic_temperature::degree_celsius,
};

use super::{Derived, EcsConfig, EcsError, EcsInput, UNKNOWNS};

pub(super) const T0: usize = 0;
pub(super) const W0: usize = 1;
pub(super) const T1: usize = 2;
pub(super) const W1: usize = 3;
pub(super) const T2: usize = 4;
pub(super) const W2: usize = 5;
pub(super) const T3: usize = 6;
pub(super) const W3: usize = 7;
pub(super) const QS_HC: usize = 8;
pub(super) const QL_VH: usize = 9;
pub(super) const QS_TZ: usize = 10;
pub(super) const QL_TZ: usize = 11;

/// Assembled coefficient matrix `A` and right-hand side `b` of `A·x = b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSystem {
    a: SMatrix<f64, UNKNOWNS, UNKNOWNS>,
    b: SVector<f64, UNKNOWNS>,
}

impl BalanceSystem {
    /// Assembles the mixing, heating, humidifying, zone, envelope, and
    /// controller balances.
    pub fn assemble(input: &EcsInput, derived: &Derived, config: &EcsConfig) -> Self {
        let alpha = input.mixing_ratio.get::<ratio>();
        let m = derived.total_flow.get::<kilogram_per_second>();
        let c = config.specific_heat.get::<joule_per_kilogram_kelvin>();
        let l = config.latent_heat.get::<joule_per_kilogram>();
        let ua = derived.envelope_ua.get::<watt_per_kelvin>();
        let kt = config.temperature_gain;
        let kw = config.humidity_gain;

        let theta_turb = input.turbine_temp.get::<degree_celsius>();
        let theta_ext = input.external_temp.get::<degree_celsius>();
        let theta_isp = input.indoor_temp_setpoint.get::<degree_celsius>();
        let w_turb = derived.turbine_humidity_ratio.get::<ratio>();
        let w_isp = derived.indoor_humidity_ratio.get::<ratio>();
        let qsa = input.aux_sensible.get::<watt>();
        let qla = input.aux_latent.get::<watt>();

        let mut a = SMatrix::<f64, UNKNOWNS, UNKNOWNS>::zeros();
        let mut b = SVector::<f64, UNKNOWNS>::zeros();

        // Mixing box: turbine air (α) with recirculated zone air (1 − α).
        a[(0, T0)] = m * c;
        a[(0, T3)] = -(1.0 - alpha) * m * c;
        b[0] = alpha * m * c * theta_turb;
        a[(1, W0)] = m * l;
        a[(1, W3)] = -(1.0 - alpha) * m * l;
        b[1] = alpha * m * l * w_turb;

        // Heating coil: sensible only.
        a[(2, T0)] = m * c;
        a[(2, T1)] = -m * c;
        a[(2, QS_HC)] = 1.0;
        a[(3, W0)] = m * l;
        a[(3, W1)] = -m * l;

        // Vapor humidifier: latent only.
        a[(4, T1)] = m * c;
        a[(4, T2)] = -m * c;
        a[(5, W1)] = m * l;
        a[(5, W2)] = -m * l;
        a[(5, QL_VH)] = 1.0;

        // Thermal zone.
        a[(6, T2)] = m * c;
        a[(6, T3)] = -m * c;
        a[(6, QS_TZ)] = 1.0;
        a[(7, W2)] = m * l;
        a[(7, W3)] = -m * l;
        a[(7, QL_TZ)] = 1.0;

        // Envelope: conduction to outside, no moisture transfer.
        a[(8, T3)] = ua;
        a[(8, QS_TZ)] = 1.0;
        b[8] = ua * theta_ext + qsa;
        a[(9, QL_TZ)] = 1.0;
        b[9] = qla;

        // Indoor temperature controller.
        a[(10, T3)] = kt;
        a[(10, QS_HC)] = 1.0;
        b[10] = kt * theta_isp;

        // Indoor humidity controller.
        a[(11, W3)] = kw;
        a[(11, QL_VH)] = 1.0;
        b[11] = kw * w_isp;

        Self { a, b }
    }

    /// Coefficient matrix `A`.
    #[must_use]
    pub fn matrix(&self) -> &SMatrix<f64, UNKNOWNS, UNKNOWNS> {
        &self.a
    }

    /// Right-hand side `b`.
    #[must_use]
    pub fn rhs(&self) -> &SVector<f64, UNKNOWNS> {
        &self.b
    }

    /// Returns `A·x − b`.
    #[must_use]
    pub fn residual(&self, x: &SVector<f64, UNKNOWNS>) -> SVector<f64, UNKNOWNS> {
        self.a * x - self.b
    }

    /// Largest row residual relative to the magnitude of the row's terms.
    ///
    /// Row magnitudes span many decades (controller rows carry the `1e10`
    /// gain), so an unscaled norm is dominated by the controller rows.
    #[must_use]
    pub fn max_scaled_residual(&self, x: &SVector<f64, UNKNOWNS>) -> f64 {
        let residual = self.residual(x);
        (0..UNKNOWNS)
            .map(|i| {
                let terms: f64 = self
                    .a
                    .row(i)
                    .iter()
                    .zip(x.iter())
                    .map(|(coef, value)| (coef * value).abs())
                    .sum();
                let scale = (terms + self.b[i].abs()).max(1.0);
                residual[i].abs() / scale
            })
            .fold(0.0, f64::max)
    }

    /// Solves the system by LU decomposition with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::SingularSystem`] if the matrix cannot be inverted
    /// or the solution is not finite.
    pub fn solve(&self) -> Result<SVector<f64, UNKNOWNS>, EcsError> {
        self.a
            .lu()
            .solve(&self.b)
            .filter(|x| x.iter().all(|v| v.is_finite()))
            .ok_or_else(|| EcsError::SingularSystem {
                matrix: Box::new(self.a),
            })
    }
}
