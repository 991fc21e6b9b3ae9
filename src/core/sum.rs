use crate::core::decimal;
use crate::domain::model::{Angle, Sexagesimal, MAX_DEGREES};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::Result;

/// Builds the algebraic sum of two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromAngles<'a> {
    first: &'a Angle,
    second: &'a Angle,
}

impl<'a> FromAngles<'a> {
    pub fn new(first: &'a Angle, second: &'a Angle) -> Self {
        Self { first, second }
    }

    fn decimal_sum(&self) -> f64 {
        cut_overflow(self.first.to_decimal() + self.second.to_decimal())
    }
}

impl AngleBuilder for FromAngles<'_> {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        let sum = self.decimal_sum();
        tracing::debug!(
            first = %self.first,
            second = %self.second,
            sum,
            "building angle from sum"
        );
        Ok(decimal::decompose(sum))
    }
}

/// Brings a sum of two in-range angles back within ±360°.
///
/// Operands are bounded to ±360°, so one correction is enough.
fn cut_overflow(sum: f64) -> f64 {
    let round = f64::from(MAX_DEGREES);
    if sum > round {
        sum - round
    } else if sum < -round {
        sum + round
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Direction;

    #[test]
    fn test_cut_overflow() {
        assert_eq!(cut_overflow(400.0), 40.0);
        assert_eq!(cut_overflow(-400.0), -40.0);
        assert_eq!(cut_overflow(720.0), 360.0);
        assert_eq!(cut_overflow(360.0), 360.0);
        assert_eq!(cut_overflow(-12.5), -12.5);
    }

    #[test]
    fn test_sum_of_opposite_angles_is_null() {
        let alfa = Angle::from_decimal(30.5).unwrap();
        let beta = Angle::from_decimal(-30.5).unwrap();
        let data = FromAngles::new(&alfa, &beta).fetch_data().unwrap();
        assert_eq!(
            (data.degrees, data.minutes, data.seconds, data.direction),
            (0, 0, 0.0, Direction::Clockwise)
        );
    }

    #[test]
    fn test_sum_wraps_past_round_angle() {
        let alfa = Angle::from_components(300, 0, 0.0, Direction::CounterClockwise).unwrap();
        let beta = Angle::from_components(100, 30, 0.0, Direction::CounterClockwise).unwrap();
        let data = FromAngles::new(&alfa, &beta).fetch_data().unwrap();
        assert_eq!(
            (data.degrees, data.minutes, data.seconds, data.direction),
            (40, 30, 0.0, Direction::CounterClockwise)
        );
    }
}
