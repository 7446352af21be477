use nalgebra::SMatrix;
use thiserror::Error;

use crate::support::{
    constraint::ConstraintError,
    psychro::{ChartError, PsychroError},
};

use super::UNKNOWNS;

/// Errors that can occur while solving or reporting the ECS balance.
#[derive(Debug, Error)]
pub enum EcsError {
    /// A quantity used as a divisor is zero (or not a number).
    ///
    /// This happens for a zero mixing ratio or when the external temperature
    /// equals the indoor setpoint, which leaves the envelope conductance
    /// undefined.
    #[error("degenerate input: {quantity}")]
    DegenerateInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The assembled balance matrix could not be inverted.
    #[error("singular balance system")]
    SingularSystem {
        /// The assembled coefficient matrix, for diagnosis.
        matrix: Box<SMatrix<f64, UNKNOWNS, UNKNOWNS>>,
    },

    /// The psychrometric model rejected a state.
    #[error("psychrometric evaluation failed")]
    Psychro(#[from] PsychroError),

    /// The chart backend failed.
    #[error("chart rendering failed")]
    Chart(#[from] ChartError),

    /// Writing the report failed.
    #[error("report output failed")]
    Report(#[from] std::io::Error),
}

impl EcsError {
    pub(super) fn degenerate(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::DegenerateInput { quantity, source }
    }
}
