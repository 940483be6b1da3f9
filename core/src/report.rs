//! # Roster Report
//!
//! A snapshot of every student, their enrollments and averages, built by
//! [`crate::StudentRoster::report`]. Building it never mutates the roster;
//! turning it into text is left to the `Display` impls and to the caller.

use std::fmt;

use aula_common::{Grade, Student, StudentId};

#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentLine {
    pub subject: String,
    pub grades: Vec<Grade>,
    pub enrolled_on: String,
    /// Not rounded; rendered with two decimals.
    pub average: f64,
}

impl EnrollmentLine {
    pub fn joined_grades(&self) -> String {
        self.grades
            .iter()
            .map(Grade::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for EnrollmentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: Calificaciones: {} | Promedio: {:.2}",
            self.subject,
            self.joined_grades(),
            self.average
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub id: StudentId,
    pub name: String,
    pub age: u64,
    pub address: String,
    /// The student rendered on one line.
    pub summary: String,
    pub overall_average: f64,
    pub enrollments: Vec<EnrollmentLine>,
}

impl From<&Student> for StudentReport {
    fn from(student: &Student) -> Self {
        let enrollments = student
            .enrollments()
            .map(|(subject, enrollment)| EnrollmentLine {
                subject: subject.to_string(),
                grades: enrollment.grades().to_vec(),
                enrolled_on: enrollment.date_label(),
                average: enrollment.average(),
            })
            .collect();

        Self {
            id: student.id(),
            name: student.name().to_string(),
            age: student.age(),
            address: student.address().to_string(),
            summary: student.to_string(),
            overall_average: student.overall_average(),
            enrollments,
        }
    }
}

impl fmt::Display for StudentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        write!(f, "Promedio general: {}", self.overall_average)?;
        for line in &self.enrollments {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterReport {
    pub students: Vec<StudentReport>,
    /// Mean of the student averages. Not rounded.
    pub overall_average: f64,
}

impl RosterReport {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl fmt::Display for RosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for student in &self.students {
            writeln!(f, "{student}")?;
        }
        write!(f, "Promedio general de la lista: {:.2}", self.overall_average)
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
