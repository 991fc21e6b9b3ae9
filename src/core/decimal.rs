use crate::core::rounding::round_half_down;
use crate::domain::model::{Direction, Sexagesimal, MAX_DEGREES};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::{AngleError, Result};

/// Builds an angle from signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromDecimal {
    decimal: f64,
}

impl FromDecimal {
    pub fn new(decimal: f64) -> Self {
        Self { decimal }
    }

    fn check_overflow(&self) -> Result<()> {
        if !self.decimal.is_finite() {
            return Err(AngleError::overflow("The angle must be a finite number."));
        }
        if self.decimal.abs() > f64::from(MAX_DEGREES) {
            return Err(AngleError::overflow("The angle can't be greater than 360°."));
        }
        Ok(())
    }
}

impl AngleBuilder for FromDecimal {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        tracing::debug!(decimal = self.decimal, "building angle from decimal degrees");
        self.check_overflow()?;
        Ok(decompose(self.decimal))
    }
}

/// Splits signed decimal degrees into a carried sexagesimal tuple.
///
/// Degrees and minutes are truncated; seconds are rounded half-down to one
/// decimal and the carry runs after that rounding, because rounding alone can
/// reach 60". No range check: a value just under 360 may carry up to 360°.
pub(crate) fn decompose(decimal: f64) -> Sexagesimal {
    let magnitude = decimal.abs();

    let mut degrees = magnitude.trunc() as u32;
    let mut minutes = ((magnitude - f64::from(degrees)) * 60.0).trunc() as u32;
    let mut seconds = round_half_down(
        (magnitude - f64::from(degrees) - f64::from(minutes) / 60.0) * 3600.0,
        1,
    );

    if seconds >= 60.0 {
        tracing::trace!(degrees, minutes, seconds, "carrying 60 seconds into minutes");
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        tracing::trace!(degrees, minutes, "carrying 60 minutes into degrees");
        minutes = 0;
        degrees += 1;
    }

    Sexagesimal::new(degrees, minutes, seconds, Direction::from_sign(decimal))
}
