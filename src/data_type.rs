use num::Float;
use std::{fmt::Debug, str::FromStr};

/// Gathers [`Float`], `FromStr`, and `Debug` in one trait.
/// Every type that is used as value of an evaluation needs to implement this, which
/// `f32` and `f64` do.
pub trait DataType: Float + FromStr + Debug {}
impl<T: Float + FromStr + Debug> DataType for T {}
