use crate::core::rounding::round_to;
use crate::core::source::AngleSource;
use crate::domain::model::Angle;
use crate::utils::error::{AngleError, Result};
use serde_json::Value;
use std::cmp::Ordering;

/// Type names a comparison accepts, as reported by [`AngleError::InvalidArgument`].
pub const ACCEPTED_OPERANDS: &[&str] = &["int", "float", "string", "Angle"];

/// Right-hand side of an angle comparison.
///
/// Numbers are decimal degrees; text is DMS notation or a numeric literal.
/// `Unsupported` carries the type name of a value that can't be compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Number(f64),
    Text(&'a str),
    Angle(&'a Angle),
    Unsupported(&'static str),
}

impl Operand<'_> {
    fn to_decimal(self, method: &'static str) -> Result<f64> {
        match self {
            Operand::Number(value) if value.is_finite() => Ok(value),
            Operand::Number(_) => Err(invalid_argument(method, "non-finite float")),
            Operand::Text(text) => Ok(Angle::build(&AngleSource::from_literal(text))?.to_decimal()),
            Operand::Angle(angle) => Ok(angle.to_decimal()),
            Operand::Unsupported(type_name) => Err(invalid_argument(method, type_name)),
        }
    }
}

fn invalid_argument(method: &'static str, received: &str) -> AngleError {
    AngleError::InvalidArgument {
        method,
        position: 1,
        accepted: ACCEPTED_OPERANDS,
        received: received.to_string(),
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Number(value as f64)
    }
}

impl From<u32> for Operand<'_> {
    fn from(value: u32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Text(value)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(value: &'a String) -> Self {
        Operand::Text(value.as_str())
    }
}

impl<'a> From<&'a Angle> for Operand<'a> {
    fn from(value: &'a Angle) -> Self {
        Operand::Angle(value)
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(number) => match number.as_f64() {
                Some(decimal) => Operand::Number(decimal),
                None => Operand::Unsupported("number"),
            },
            Value::String(text) => Operand::Text(text.as_str()),
            Value::Bool(_) => Operand::Unsupported("bool"),
            Value::Null => Operand::Unsupported("null"),
            Value::Array(_) => Operand::Unsupported("array"),
            Value::Object(_) => Operand::Unsupported("object"),
        }
    }
}

/// Order relation tested by [`Angle::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
}

impl Relation {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relation::Greater => ordering == Ordering::Greater,
            Relation::GreaterOrEqual => ordering != Ordering::Less,
            Relation::Less => ordering == Ordering::Less,
            Relation::LessOrEqual => ordering != Ordering::Greater,
            Relation::Equal => ordering == Ordering::Equal,
        }
    }

    fn method_name(self) -> &'static str {
        match self {
            Relation::Greater => "Angle::is_greater_than",
            Relation::GreaterOrEqual => "Angle::is_greater_than_or_equal",
            Relation::Less => "Angle::is_less_than",
            Relation::LessOrEqual => "Angle::is_less_than_or_equal",
            Relation::Equal => "Angle::is_equal",
        }
    }
}

impl Angle {
    /// Tests `self <relation> other` on decimal degrees.
    ///
    /// With a `precision`, both sides are first rounded to that many decimals.
    ///
    /// # Errors
    /// [`AngleError::InvalidArgument`] for an unsupported or non-finite operand;
    /// text operands propagate their parse error.
    pub fn compare<'a>(
        &self,
        relation: Relation,
        other: impl Into<Operand<'a>>,
        precision: Option<u32>,
    ) -> Result<bool> {
        let method = relation.method_name();
        let mut left = self.to_decimal();
        let mut right = other.into().to_decimal(method)?;

        if let Some(digits) = precision {
            left = round_to(left, digits);
            right = round_to(right, digits);
        }

        let ordering = left
            .partial_cmp(&right)
            .ok_or_else(|| invalid_argument(method, "non-finite float"))?;
        Ok(relation.holds(ordering))
    }

    pub fn is_greater_than<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(Relation::Greater, other, None)
    }

    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.is_greater_than(other)
    }

    pub fn gt_with_precision<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: u32,
    ) -> Result<bool> {
        self.compare(Relation::Greater, other, Some(precision))
    }

    pub fn is_greater_than_or_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(Relation::GreaterOrEqual, other, None)
    }

    pub fn gte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.is_greater_than_or_equal(other)
    }

    pub fn gte_with_precision<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: u32,
    ) -> Result<bool> {
        self.compare(Relation::GreaterOrEqual, other, Some(precision))
    }

    pub fn is_less_than<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(Relation::Less, other, None)
    }

    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.is_less_than(other)
    }

    pub fn lt_with_precision<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: u32,
    ) -> Result<bool> {
        self.compare(Relation::Less, other, Some(precision))
    }

    pub fn is_less_than_or_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(Relation::LessOrEqual, other, None)
    }

    pub fn lte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.is_less_than_or_equal(other)
    }

    pub fn lte_with_precision<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: u32,
    ) -> Result<bool> {
        self.compare(Relation::LessOrEqual, other, Some(precision))
    }

    pub fn is_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.compare(Relation::Equal, other, None)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.is_equal(other)
    }

    pub fn eq_with_precision<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: u32,
    ) -> Result<bool> {
        self.compare(Relation::Equal, other, Some(precision))
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Direction;
    use serde_json::json;

    #[test]
    fn test_compare_with_numbers() {
        let alfa = Angle::from_decimal(12.5).unwrap();
        assert!(alfa.gt(12).unwrap());
        assert!(alfa.gte(12.5).unwrap());
        assert!(alfa.lt(13_i64).unwrap());
        assert!(alfa.lte(12.5f32).unwrap());
        assert!(alfa.eq(12.5).unwrap());
        assert!(!alfa.eq(12u32).unwrap());
    }

    #[test]
    fn test_compare_with_text() {
        let alfa = Angle::from_components(12, 30, 0.0, Direction::CounterClockwise).unwrap();
        assert!(alfa.is_equal("-12° 30' 0\"").unwrap());
        assert!(alfa.is_equal("-12.5").unwrap());
        assert!(alfa.is_less_than(&"-12° 29'".to_string()).unwrap());
        assert!(matches!(
            alfa.is_equal("north"),
            Err(AngleError::NoMatch { .. })
        ));
        assert!(matches!(
            alfa.is_equal("400"),
            Err(AngleError::AngleOverflow { .. })
        ));
    }

    #[test]
    fn test_compare_with_angle() {
        let alfa = Angle::from_decimal(90.0).unwrap();
        let beta = Angle::from_decimal(-90.0).unwrap();
        assert!(alfa.is_greater_than(&beta).unwrap());
        assert!(beta.is_less_than_or_equal(&alfa).unwrap());
        assert!(alfa.is_equal(&alfa).unwrap());
        assert!(alfa > beta);
    }

    #[test]
    fn test_precision_rounds_both_sides() {
        let alfa = Angle::from_components(0, 0, 0.1, Direction::Clockwise).unwrap();
        assert!(!alfa.eq(0).unwrap());
        assert!(alfa.eq_with_precision(0, 4).unwrap());
        assert!(!alfa.eq_with_precision(0, 5).unwrap());
        assert!(alfa.gte_with_precision(0.0, 3).unwrap());
        assert!(!alfa.gt_with_precision(0.0, 3).unwrap());
        assert!(alfa.lte_with_precision(0.0, 3).unwrap());
        assert!(!alfa.lt_with_precision(0.0, 3).unwrap());
    }

    #[test]
    fn test_large_precision_compares_exactly() {
        let alfa = Angle::from_decimal(10.0).unwrap();
        for precision in [16, 400, u32::MAX] {
            assert!(!alfa.eq_with_precision(14.0, precision).unwrap());
            assert!(alfa.eq_with_precision(10.0, precision).unwrap());
            assert!(alfa.lt_with_precision(14.0, precision).unwrap());
        }
    }

    #[test]
    fn test_unsupported_operand() {
        let alfa = Angle::from_decimal(1.0).unwrap();
        let err = alfa.eq(&json!(true)).unwrap_err();
        match err {
            AngleError::InvalidArgument {
                method,
                position,
                accepted,
                received,
            } => {
                assert_eq!(method, "Angle::is_equal");
                assert_eq!(position, 1);
                assert_eq!(accepted, ACCEPTED_OPERANDS);
                assert_eq!(received, "bool");
            }
            other => panic!("expected invalid argument, got {:?}", other),
        }

        assert!(alfa.gt(&json!(null)).is_err());
        assert!(alfa.gt(f64::NAN).is_err());
        assert!(alfa.eq(&json!(1)).unwrap());
        assert!(alfa.eq(&json!("1° 0' 0\"")).unwrap());
    }
}
