use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::ops::Neg;

/// The degrees of a round angle.
pub const MAX_DEGREES: u32 = 360;

/// The minutes of a round angle.
pub const MAX_MINUTES: u32 = MAX_DEGREES * 60;

/// The seconds of a round angle.
pub const MAX_SECONDS: u32 = MAX_MINUTES * 60;

/// Radian measure of a round angle.
pub const MAX_RADIANS: f64 = 2.0 * PI;

/// Rotation sense of an angle. `Clockwise` is the non-negative sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Direction of a signed decimal value; zero counts as non-negative.
    pub fn from_sign(value: f64) -> Self {
        if value >= 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The `(degrees, minutes, seconds, direction)` tuple every builder produces.
///
/// Magnitude is unsigned; the sign lives in `direction`. Built through
/// [`Sexagesimal::new`] so the null and round angles always carry the
/// non-negative direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub direction: Direction,
}

impl Sexagesimal {
    pub fn new(degrees: u32, minutes: u32, seconds: f64, direction: Direction) -> Self {
        let direction = if Self::is_unsigned_magnitude(degrees, minutes, seconds) {
            Direction::Clockwise
        } else {
            direction
        };

        Self {
            degrees,
            minutes,
            seconds,
            direction,
        }
    }

    // 0° and 360° have no negative counterpart.
    fn is_unsigned_magnitude(degrees: u32, minutes: u32, seconds: f64) -> bool {
        minutes == 0 && seconds == 0.0 && (degrees == 0 || degrees == MAX_DEGREES)
    }
}

/// Degrees, minutes and seconds of an angle, positional or keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Components {
    Positional(u32, u32, f64),
    Keyed(BTreeMap<&'static str, f64>),
}

/// A plane angle in canonical sexagesimal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    direction: Direction,
}

impl Angle {
    /// Stores a builder's tuple as is.
    pub(crate) fn new(data: Sexagesimal) -> Self {
        Self {
            degrees: data.degrees,
            minutes: data.minutes,
            seconds: data.seconds,
            direction: data.direction,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_clockwise(&self) -> bool {
        self.direction == Direction::Clockwise
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.direction == Direction::CounterClockwise
    }

    /// Returns the canonical tuple this angle was built from.
    pub fn data(&self) -> Sexagesimal {
        Sexagesimal {
            degrees: self.degrees,
            minutes: self.minutes,
            seconds: self.seconds,
            direction: self.direction,
        }
    }

    /// Signed decimal degrees, in `[-360, 360]`.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        self.direction.sign() * magnitude
    }

    /// Signed radians, in `[-2π, 2π]`.
    pub fn to_radians(&self) -> f64 {
        self.to_decimal().to_radians()
    }

    /// The same magnitude rotating the other way.
    ///
    /// The null and round angles are unsigned, so they come back unchanged.
    #[must_use]
    pub fn toggled(self) -> Self {
        let data = self.data();
        Angle::new(Sexagesimal::new(
            data.degrees,
            data.minutes,
            data.seconds,
            data.direction.reversed(),
        ))
    }

    /// In-place variant of [`Angle::toggled`].
    pub fn toggle_direction(&mut self) -> &mut Self {
        *self = self.toggled();
        self
    }

    pub fn to_components(&self, associative: bool) -> Components {
        if associative {
            Components::Keyed(BTreeMap::from([
                ("degrees", f64::from(self.degrees)),
                ("minutes", f64::from(self.minutes)),
                ("seconds", self.seconds),
            ]))
        } else {
            Components::Positional(self.degrees, self.minutes, self.seconds)
        }
    }

    /// DMS notation, e.g. `-12° 30' 15.5"`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_counter_clockwise() { "-" } else { "" };
        write!(
            f,
            "{}{}° {}' {}\"",
            sign, self.degrees, self.minutes, self.seconds
        )
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        self.toggled()
    }
}
