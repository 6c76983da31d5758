use num_traits::Float;
use std::fmt::{Debug, Display};

/// Scalar element type a [`Graph`](crate::Graph) can be built over.
///
/// Any floating-point type implementing [`Float`] qualifies; `f64` is the default
/// used throughout the crate, `f32` works as well.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + 'static {}

/// Converts an `f64` constant into the graph's scalar type.
pub(crate) fn cast<T: Scalar>(value: f64) -> Result<T, crate::AutodiffError> {
    T::from(value).ok_or_else(|| {
        crate::AutodiffError::InternalError(format!("Cannot represent {} in scalar type", value))
    })
}
