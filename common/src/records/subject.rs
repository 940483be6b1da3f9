use std::fmt;

use tracing::debug;

use crate::error::RecordError;
use crate::records::grade::Grade;
use crate::records::mean;
use crate::utils::validation;

/// A course, identified by its name.
///
/// Grades recorded here are entered against the subject itself and are
/// independent from the grades a [`crate::Student`] collects through an
/// enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    grades: Vec<Grade>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Result<Self, RecordError> {
        let name = name.into();
        if !validation::is_valid_name(&name) {
            return Err(RecordError::InvalidSubjectName { name });
        }
        Ok(Self {
            name,
            grades: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Validates `value` and records it. Nothing is stored on failure.
    pub fn add_grade(&mut self, value: i64) -> Result<Grade, RecordError> {
        let grade = Grade::new(value)?;
        self.push_grade(grade);
        Ok(grade)
    }

    pub fn push_grade(&mut self, grade: Grade) {
        debug!(subject = %self.name, %grade, "grade recorded on subject");
        self.grades.push(grade);
    }

    /// Mean of every recorded grade, `0.0` when there are none. Not rounded.
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asignatura: {}", self.name)
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
