use crate::domain::model::{Direction, Sexagesimal, MAX_DEGREES};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::{AngleError, Result};

/// Builds an angle from separate degrees, minutes, seconds and direction.
///
/// Strict: out-of-range fields are rejected, never carried. The sign of
/// `degrees` is ignored; `direction` alone decides the rotation sense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromComponents {
    degrees: i32,
    minutes: u32,
    seconds: f64,
    direction: Direction,
}

impl FromComponents {
    pub fn new(degrees: i32, minutes: u32, seconds: f64, direction: Direction) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            direction,
        }
    }

    fn check_overflow(&self) -> Result<()> {
        if self.degrees.unsigned_abs() > MAX_DEGREES {
            return Err(AngleError::overflow(
                "The angle degrees can't be greater than 360°.",
            ));
        }
        if self.minutes > 59 {
            return Err(AngleError::overflow(
                "The angle minutes can't be greater than 59'.",
            ));
        }
        if self.seconds >= 60.0 {
            return Err(AngleError::overflow(
                "The angle seconds can't be greater than or equal to 60\".",
            ));
        }
        if !self.seconds.is_finite() || self.seconds < 0.0 {
            return Err(AngleError::overflow(
                "The angle seconds must be a finite, non-negative number.",
            ));
        }
        if self.degrees.unsigned_abs() == MAX_DEGREES && (self.minutes > 0 || self.seconds > 0.0) {
            return Err(AngleError::overflow("The angle can't be greater than 360°."));
        }
        Ok(())
    }
}

impl AngleBuilder for FromComponents {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        tracing::debug!(
            degrees = self.degrees,
            minutes = self.minutes,
            seconds = self.seconds,
            direction = ?self.direction,
            "building angle from components"
        );
        self.check_overflow()?;

        Ok(Sexagesimal::new(
            self.degrees.unsigned_abs(),
            self.minutes,
            self.seconds,
            self.direction,
        ))
    }
}
