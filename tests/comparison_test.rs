use sexagesimal::{Angle, AngleError, Direction, Operand, Relation};
use serde_json::json;

fn angle(text: &str) -> Angle {
    Angle::from_text(text).unwrap()
}

#[test]
fn test_equal_comparison_with_string() {
    let alfa = angle("-33° 52' 7.3\"");
    let beta = alfa.to_text();
    assert!(alfa.is_equal(&beta).unwrap());
    assert!(alfa.eq(beta.as_str()).unwrap());
}

#[test]
fn test_equal_comparison_with_integer() {
    let alfa = Angle::from_components(90, 0, 0.0, Direction::CounterClockwise).unwrap();
    assert!(alfa.is_equal(-90).unwrap());
    assert!(alfa.eq(-90_i64).unwrap());
}

#[test]
fn test_equal_comparison_with_float() {
    let alfa = Angle::from_decimal(12.25).unwrap();
    assert!(alfa.is_equal(12.25).unwrap());
    assert!(alfa.eq_with_precision(12.250_000_1, 6).unwrap());
}

#[test]
fn test_greater_than_comparison_with_string() {
    let alfa = angle("20° 30' 0\"");
    let beta = Angle::sum(&alfa, &angle("-1°")).unwrap();
    assert!(alfa.is_greater_than(&beta.to_text()).unwrap());
    assert!(alfa.gt(&beta.to_text()).unwrap());
    assert!(!beta.gt(&alfa.to_text()).unwrap());
}

#[test]
fn test_less_than_or_equal_with_angle() {
    let alfa = angle("-10° 0' 0\"");
    let beta = angle("10° 0' 0\"");
    assert!(alfa.lte(&beta).unwrap());
    assert!(alfa.lte(&alfa).unwrap());
    assert!(!beta.lte(&alfa).unwrap());
    assert!(beta.gte(&alfa).unwrap());
}

#[test]
fn test_comparison_through_relation() {
    let alfa = angle("1° 0' 0\"");
    assert!(alfa.compare(Relation::LessOrEqual, Operand::Number(1.0), None).unwrap());
    assert!(!alfa.compare(Relation::Less, Operand::Number(1.0), None).unwrap());
}

#[test]
fn test_equal_comparison_exception() {
    let alfa = angle("1° 0' 0\"");
    let err = alfa.eq(&json!(true)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Angle::is_equal: argument #1 must be one of int, float, string, Angle, bool given"
    );

    let err = alfa.lte(&json!([1, 2])).unwrap_err();
    assert!(matches!(
        err,
        AngleError::InvalidArgument { method: "Angle::is_less_than_or_equal", .. }
    ));
}

#[test]
fn test_ordering_of_angles() {
    let mut angles = vec![angle("90°"), angle("-90°"), angle("0°"), angle("45° 30'")];
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let texts: Vec<String> = angles.iter().map(Angle::to_text).collect();
    assert_eq!(
        texts,
        vec!["-90° 0' 0\"", "0° 0' 0\"", "45° 30' 0\"", "90° 0' 0\""]
    );
}
