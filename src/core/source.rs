use crate::core::components::FromComponents;
use crate::core::decimal::FromDecimal;
use crate::core::radians::FromRadians;
use crate::core::sum::FromAngles;
use crate::core::text::FromText;
use crate::domain::model::{Angle, Direction, Sexagesimal};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::{AngleError, Result};
use std::str::FromStr;

/// Every external representation an angle can be built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleSource<'a> {
    Components {
        degrees: i32,
        minutes: u32,
        seconds: f64,
        direction: Direction,
    },
    Decimal(f64),
    Radians(f64),
    Text(&'a str),
    Sum(&'a Angle, &'a Angle),
}

impl<'a> AngleSource<'a> {
    /// A numeric literal is read as decimal degrees, anything else as DMS text.
    pub fn from_literal(literal: &'a str) -> Self {
        match literal.trim().parse::<f64>() {
            Ok(decimal) => AngleSource::Decimal(decimal),
            Err(_) => AngleSource::Text(literal),
        }
    }
}

impl AngleBuilder for AngleSource<'_> {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        match *self {
            AngleSource::Components {
                degrees,
                minutes,
                seconds,
                direction,
            } => FromComponents::new(degrees, minutes, seconds, direction).fetch_data(),
            AngleSource::Decimal(decimal) => FromDecimal::new(decimal).fetch_data(),
            AngleSource::Radians(radians) => FromRadians::new(radians).fetch_data(),
            AngleSource::Text(text) => FromText::new(text).fetch_data(),
            AngleSource::Sum(first, second) => FromAngles::new(first, second).fetch_data(),
        }
    }
}

impl Angle {
    /// Builds an angle from any builder's tuple.
    pub fn build<B: AngleBuilder + ?Sized>(builder: &B) -> Result<Angle> {
        builder.fetch_data().map(Angle::new)
    }

    /// # Errors
    /// [`AngleError::AngleOverflow`] when a field is out of range.
    pub fn from_components(
        degrees: i32,
        minutes: u32,
        seconds: f64,
        direction: Direction,
    ) -> Result<Angle> {
        Angle::build(&FromComponents::new(degrees, minutes, seconds, direction))
    }

    /// # Errors
    /// [`AngleError::AngleOverflow`] beyond ±360°.
    pub fn from_decimal(decimal: f64) -> Result<Angle> {
        Angle::build(&FromDecimal::new(decimal))
    }

    /// # Errors
    /// [`AngleError::AngleOverflow`] beyond ±2π.
    pub fn from_radians(radians: f64) -> Result<Angle> {
        Angle::build(&FromRadians::new(radians))
    }

    /// # Errors
    /// [`AngleError::NoMatch`] when `text` is not DMS notation.
    /// [`AngleError::RegexFailure`] is reserved for a matched group that can't be
    /// converted; the grammar's short digit runs never trigger it.
    pub fn from_text(text: &str) -> Result<Angle> {
        Angle::build(&FromText::new(text))
    }

    /// Algebraic sum, wrapped back within ±360°.
    pub fn sum(first: &Angle, second: &Angle) -> Result<Angle> {
        Angle::build(&FromAngles::new(first, second))
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        Angle::from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literal_detects_numbers() {
        assert_eq!(AngleSource::from_literal("12.5"), AngleSource::Decimal(12.5));
        assert_eq!(AngleSource::from_literal(" -7 "), AngleSource::Decimal(-7.0));
        assert_eq!(
            AngleSource::from_literal("12° 30'"),
            AngleSource::Text("12° 30'")
        );
    }

    #[test]
    fn test_sources_agree() {
        let from_text = Angle::build(&AngleSource::Text("12° 30' 0\"")).unwrap();
        let from_decimal = Angle::build(&AngleSource::Decimal(12.5)).unwrap();
        let from_radians = Angle::build(&AngleSource::Radians(12.5f64.to_radians())).unwrap();
        let from_components = Angle::build(&AngleSource::Components {
            degrees: 12,
            minutes: 30,
            seconds: 0.0,
            direction: Direction::Clockwise,
        })
        .unwrap();

        assert_eq!(from_text, from_decimal);
        assert_eq!(from_text, from_radians);
        assert_eq!(from_text, from_components);
    }

    #[test]
    fn test_sum_source() {
        let alfa = Angle::from_decimal(10.25).unwrap();
        let beta = Angle::from_decimal(-20.5).unwrap();
        let sum = Angle::build(&AngleSource::Sum(&alfa, &beta)).unwrap();
        assert_eq!(sum.to_text(), "-10° 15' 0\"");
    }

    #[test]
    fn test_from_str() {
        let alfa: Angle = "-1° 2' 3.4\"".parse().unwrap();
        assert_eq!(alfa.to_text(), "-1° 2' 3.4\"");
        assert!("not an angle".parse::<Angle>().is_err());
    }
}
