//! DMS text parsing.
//!
//! Accepted form: an optional `-`, degrees (0-360), an optional `°`, one
//! optional ASCII whitespace, optional minutes (0-59), an optional `'`, one
//! optional ASCII whitespace, optional seconds (0-59 with at most one decimal digit) and an
//! optional `"`. 360° only matches when minutes and seconds are absent or zero.

use crate::domain::model::{Direction, Sexagesimal, MAX_DEGREES};
use crate::domain::ports::AngleBuilder;
use crate::utils::error::{AngleError, Result};
use std::str::FromStr;

/// Builds an angle from its DMS notation, e.g. `-12° 30' 15.5"`.
#[derive(Debug, Clone, PartialEq)]
pub struct FromText {
    measure: String,
}

impl FromText {
    pub fn new(measure: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
        }
    }
}

impl AngleBuilder for FromText {
    fn fetch_data(&self) -> Result<Sexagesimal> {
        tracing::debug!(measure = %self.measure, "building angle from text");
        let groups =
            match_measure(&self.measure).ok_or_else(|| AngleError::no_match(&self.measure))?;

        let degrees: u32 = parse_group(groups.degrees)?;
        let minutes: u32 = groups.minutes.map(parse_group).transpose()?.unwrap_or(0);
        let seconds: f64 = groups.seconds.map(parse_group).transpose()?.unwrap_or(0.0);

        if degrees > MAX_DEGREES
            || minutes > 59
            || seconds >= 60.0
            || (degrees == MAX_DEGREES && (minutes > 0 || seconds > 0.0))
        {
            return Err(AngleError::no_match(&self.measure));
        }

        let direction = if groups.negative {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };

        Ok(Sexagesimal::new(degrees, minutes, seconds, direction))
    }
}

/// Raw digit groups of a structurally matching measure.
#[derive(Debug, PartialEq)]
struct Groups<'a> {
    negative: bool,
    degrees: &'a str,
    minutes: Option<&'a str>,
    seconds: Option<&'a str>,
}

fn match_measure(input: &str) -> Option<Groups<'_>> {
    let mut cursor = Cursor::new(input);

    let negative = cursor.eat('-');
    let degrees = cursor.digits(3)?;
    cursor.eat('°');
    cursor.eat_whitespace();

    let minutes = cursor.digits(2);
    cursor.eat('\'');
    cursor.eat_whitespace();

    let seconds = cursor.seconds();
    cursor.eat('"');

    cursor.is_at_end().then_some(Groups {
        negative,
        degrees,
        minutes,
        seconds,
    })
}

fn parse_group<T>(group: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    group.parse().map_err(|e: T::Err| AngleError::RegexFailure {
        diagnostic: format!("cannot convert '{}': {}", group, e),
    })
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_whitespace(&mut self) -> bool {
        match self.peek() {
            Some(c) if c.is_ascii_whitespace() => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Up to `max` ASCII digits; `None` if there are none.
    fn digits(&mut self, max: usize) -> Option<&'a str> {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.input[start..self.pos])
    }

    /// Up to two digits, optionally followed by `.` and exactly one digit.
    fn seconds(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.digits(2)?;

        let before_fraction = self.pos;
        if self.eat('.') && self.digits(1).is_none() {
            self.pos = before_fraction;
        }
        Some(&self.input[start..self.pos])
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }
}
