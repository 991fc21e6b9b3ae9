pub mod comparison;
pub mod components;
pub mod decimal;
pub mod radians;
pub mod rounding;
pub mod source;
pub mod sum;
pub mod text;

pub use crate::domain::model::{Angle, Components, Direction, Sexagesimal};
pub use crate::domain::ports::AngleBuilder;
pub use crate::utils::error::Result;
