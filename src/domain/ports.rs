use crate::domain::model::Sexagesimal;
use crate::utils::error::Result;

/// A transient source of one canonical angle tuple.
///
/// Builders validate their input and hand back the tuple the angle stores;
/// they never touch an existing [`Angle`](crate::domain::model::Angle).
pub trait AngleBuilder {
    fn fetch_data(&self) -> Result<Sexagesimal>;
}
