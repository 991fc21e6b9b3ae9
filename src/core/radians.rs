use crate::core::decimal;
use crate::domain::model::{Sexagesimal, MAX_RADIANS};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::{AngleError, Result};

/// Builds an angle from signed radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromRadians {
    radians: f64,
}

impl FromRadians {
    pub fn new(radians: f64) -> Self {
        Self { radians }
    }

    fn check_overflow(&self) -> Result<()> {
        if !self.radians.is_finite() {
            return Err(AngleError::overflow("The angle must be a finite number."));
        }
        if self.radians.abs() > MAX_RADIANS {
            return Err(AngleError::overflow(
                "The angle can't be greater than 2π radians.",
            ));
        }
        Ok(())
    }
}

impl AngleBuilder for FromRadians {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        tracing::debug!(radians = self.radians, "building angle from radians");
        self.check_overflow()?;
        // The range is already checked in radians; conversion noise at ±2π must not overflow.
        Ok(decimal::decompose(self.radians.to_degrees()))
    }
}
