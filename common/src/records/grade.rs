use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

pub const MIN_GRADE: u8 = 0;
pub const MAX_GRADE: u8 = 10;

/// An integer mark in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: i64) -> Result<Self, RecordError> {
        if (i64::from(MIN_GRADE)..=i64::from(MAX_GRADE)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RecordError::invalid_grade(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Grade {
    type Error = RecordError;

    /// Accepts only integral values, so `7.0` is a grade and `7.5` is not.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(RecordError::invalid_grade(value));
        }
        if value < f64::from(MIN_GRADE) || value > f64::from(MAX_GRADE) {
            return Err(RecordError::invalid_grade(value));
        }
        Ok(Self(value as u8))
    }
}

impl FromStr for Grade {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::new(value);
        }
        // `8.0` is still a whole grade.
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| RecordError::invalid_grade(trimmed))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
