use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::error::RecordError;
use crate::ids::StudentId;
use crate::records::address::Address;
use crate::records::grade::Grade;
use crate::records::subject::Subject;
use crate::records::{mean, round2};
use crate::utils::{date, validation};

/// A student's record for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    grades: Vec<Grade>,
    enrolled_on: NaiveDate,
}

impl Enrollment {
    fn new(enrolled_on: NaiveDate) -> Self {
        Self {
            grades: Vec::new(),
            enrolled_on,
        }
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn enrolled_on(&self) -> NaiveDate {
        self.enrolled_on
    }

    /// The enrollment date as shown to users, e.g. `18 de octubre de 2026`.
    pub fn date_label(&self) -> String {
        date::long_date_es(self.enrolled_on)
    }

    /// Mean of this enrollment's grades, `0.0` without grades. Not rounded.
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }
}

/// Coerces raw age input: negative values become `0`, the rest are kept.
pub fn sanitize_age(age: i64) -> u64 {
    u64::try_from(age).unwrap_or(0)
}

/// Parses an age typed by a user. Anything that is not an integer becomes `0`;
/// negatives are left for [`sanitize_age`].
pub fn parse_age(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    age: u64,
    address: Address,
    /// Keyed by subject name, in enrollment order.
    enrollments: IndexMap<String, Enrollment>,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: i64,
        address: Address,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if !validation::is_valid_name(&name) {
            return Err(RecordError::InvalidStudentName { name });
        }
        Ok(Self {
            id,
            name,
            age: sanitize_age(age),
            address,
            enrollments: IndexMap::new(),
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn enrollments(&self) -> impl Iterator<Item = (&str, &Enrollment)> {
        self.enrollments
            .iter()
            .map(|(name, enrollment)| (name.as_str(), enrollment))
    }

    pub fn enrollment(&self, subject_name: &str) -> Option<&Enrollment> {
        self.enrollments.get(subject_name)
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_enrolled(&self, subject_name: &str) -> bool {
        self.enrollments.contains_key(subject_name)
    }

    /// Enrolls the student in `subject`, dated today.
    pub fn enroll(&mut self, subject: &Subject) -> Result<(), RecordError> {
        self.enroll_on(subject, date::today())
    }

    pub fn enroll_on(&mut self, subject: &Subject, date: NaiveDate) -> Result<(), RecordError> {
        if self.is_enrolled(subject.name()) {
            return Err(RecordError::AlreadyEnrolled {
                subject: subject.name().to_string(),
            });
        }
        self.enrollments
            .insert(subject.name().to_string(), Enrollment::new(date));
        info!("Estudiante matriculado en {}.", subject.name());
        Ok(())
    }

    /// Drops the enrollment for `subject` together with its grades.
    ///
    /// Not being enrolled is reported, not treated as an error: the call
    /// returns `None` and leaves the student untouched. Use
    /// [`Student::try_unenroll`] to fail instead.
    pub fn unenroll(&mut self, subject: &Subject) -> Option<Enrollment> {
        match self.enrollments.shift_remove(subject.name()) {
            Some(enrollment) => {
                info!(
                    "Asignatura {} eliminada del estudiante {}.",
                    subject.name(),
                    self.name
                );
                Some(enrollment)
            }
            None => {
                warn!(
                    "El estudiante {} no está matriculado en {}.",
                    self.name,
                    subject.name()
                );
                None
            }
        }
    }

    pub fn try_unenroll(&mut self, subject: &Subject) -> Result<Enrollment, RecordError> {
        if !self.is_enrolled(subject.name()) {
            return Err(RecordError::NotEnrolled {
                subject: subject.name().to_string(),
            });
        }
        self.unenroll(subject).ok_or_else(|| RecordError::NotEnrolled {
            subject: subject.name().to_string(),
        })
    }

    /// Records a grade for an enrolled subject.
    ///
    /// Enrollment is checked before the grade value.
    pub fn add_grade(&mut self, subject: &Subject, value: i64) -> Result<Grade, RecordError> {
        self.record_grade(subject, || Grade::new(value))
    }

    /// Like [`Student::add_grade`] for a grade typed as text, which is only
    /// parsed once the enrollment is known to exist.
    pub fn add_grade_str(&mut self, subject: &Subject, raw: &str) -> Result<Grade, RecordError> {
        self.record_grade(subject, || raw.parse())
    }

    fn record_grade(
        &mut self,
        subject: &Subject,
        grade: impl FnOnce() -> Result<Grade, RecordError>,
    ) -> Result<Grade, RecordError> {
        let Some(enrollment) = self.enrollments.get_mut(subject.name()) else {
            return Err(RecordError::NotEnrolled {
                subject: subject.name().to_string(),
            });
        };
        let grade = grade()?;
        enrollment.grades.push(grade);
        debug!(student = %self.id, subject = subject.name(), %grade, "grade recorded");
        Ok(grade)
    }

    /// Unweighted mean of the per-subject averages, rounded to two decimals.
    ///
    /// Every enrollment counts once, whatever its number of grades; an
    /// enrollment without grades counts as `0`.
    pub fn overall_average(&self) -> f64 {
        if self.enrollments.is_empty() {
            return 0.0;
        }
        let total: f64 = self.enrollments.values().map(Enrollment::average).sum();
        round2(total / self.enrollments.len() as f64)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Nombre: {}, Edad: {}, Dirección: {}",
            self.id, self.name, self.age, self.address
        )
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
