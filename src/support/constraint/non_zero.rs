use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is not zero.
///
/// Quantities that appear as divisors in a model (a mixing ratio, an
/// indoor-to-outdoor temperature difference) are wrapped with this marker
/// before dividing, so a degenerate configuration is reported instead of
/// producing `inf` or `NaN`.
///
/// # Examples
///
/// ```
/// use ecs_models::support::constraint::NonZero;
/// use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
///
/// let delta_t = NonZero::new(TemperatureInterval::new::<kelvin>(-11.0)).unwrap();
/// assert_eq!(delta_t.into_inner().get::<kelvin>(), -11.0);
///
/// assert!(NonZero::new(TemperatureInterval::new::<kelvin>(0.0)).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonZero>> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
