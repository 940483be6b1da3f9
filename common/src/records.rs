//! # Academic Records
//!
//! The entities and value objects of the record model.
//!
//! ## Value Objects
//! * [`address::Address`]: a postal address, immutable once built.
//! * [`grade::Grade`]: an integer mark between 0 and 10.
//!
//! ## Entities
//! * [`subject::Subject`]: a course, identified by its name.
//! * [`student::Student`]: a person with an ID, an address and enrollments.
//!
//! Enrollments reference subjects by **name**, not by object. Removing a
//! subject from a catalog leaves existing enrollments untouched.

pub mod address;
pub mod grade;
pub mod student;
pub mod subject;

/// Arithmetic mean of `grades`, `0.0` when empty.
pub(crate) fn mean(grades: &[grade::Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: u32 = grades.iter().map(|grade| u32::from(grade.value())).sum();
    f64::from(sum) / grades.len() as f64
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
