//! # Academy Service
//!
//! Implements the use cases of the interactive shell on top of one
//! [`StudentRoster`] and one [`SubjectCatalog`].
//!
//! Callers identify students by ID and subjects by name (ignoring case). The
//! service resolves both, then hands the subject to the student. The two
//! collections stay independent: removing a subject does not cascade into
//! enrollments, which keep the subject's name as a plain key.

use tracing::debug;

use aula_common::{Address, Enrollment, Grade, RecordError, Student, StudentId, Subject};

use crate::catalog::SubjectCatalog;
use crate::report::RosterReport;
use crate::roster::StudentRoster;

#[derive(Default)]
pub struct Academy {
    roster: StudentRoster,
    catalog: SubjectCatalog,
}

impl Academy {
    pub fn new(roster: StudentRoster, catalog: SubjectCatalog) -> Self {
        Self { roster, catalog }
    }

    pub fn roster(&self) -> &StudentRoster {
        &self.roster
    }

    pub fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    pub fn register_student(
        &mut self,
        name: &str,
        age: i64,
        address: Address,
    ) -> Result<StudentId, RecordError> {
        let student = self.roster.new_student(name, age, address)?;
        let id = self.roster.add(student)?;
        debug!(student = %id, "student registered");
        Ok(id)
    }

    pub fn remove_student(&mut self, id: StudentId) -> Option<Student> {
        self.roster.remove(id)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, RecordError> {
        self.roster.find_by_id(id)
    }

    pub fn search_students(&self, pattern: &str) -> Vec<&Student> {
        self.roster.search(pattern)
    }

    pub fn add_subject(&mut self, name: &str) -> Result<(), RecordError> {
        let subject = Subject::new(name)?;
        self.catalog.add(subject)
    }

    pub fn remove_subject(&mut self, name: &str) -> Result<Vec<Subject>, RecordError> {
        self.catalog.remove(name)
    }

    pub fn search_subjects(&self, pattern: &str) -> Vec<&Subject> {
        self.catalog.search(pattern)
    }

    /// Records a grade against the subject itself, outside any enrollment.
    pub fn grade_subject(&mut self, name: &str, value: i64) -> Result<Grade, RecordError> {
        self.catalog
            .get_mut(name)
            .ok_or_else(|| RecordError::SubjectNotFound {
                name: name.to_string(),
            })?
            .add_grade(value)
    }

    /// Like [`Academy::grade_subject`], parsing `raw` after the subject is found.
    pub fn grade_subject_str(&mut self, name: &str, raw: &str) -> Result<Grade, RecordError> {
        let subject = self
            .catalog
            .get_mut(name)
            .ok_or_else(|| RecordError::SubjectNotFound {
                name: name.to_string(),
            })?;
        let grade: Grade = raw.parse()?;
        subject.push_grade(grade);
        Ok(grade)
    }

    pub fn enroll(&mut self, id: StudentId, subject_name: &str) -> Result<(), RecordError> {
        let student = self.roster.find_by_id_mut(id)?;
        let subject = lookup(&self.catalog, subject_name)?;
        student.enroll(subject)
    }

    /// See [`Student::unenroll`]: not being enrolled yields `Ok(None)`.
    pub fn unenroll(
        &mut self,
        id: StudentId,
        subject_name: &str,
    ) -> Result<Option<Enrollment>, RecordError> {
        let student = self.roster.find_by_id_mut(id)?;
        let subject = lookup(&self.catalog, subject_name)?;
        Ok(student.unenroll(subject))
    }

    pub fn add_grade(
        &mut self,
        id: StudentId,
        subject_name: &str,
        value: i64,
    ) -> Result<Grade, RecordError> {
        let student = self.roster.find_by_id_mut(id)?;
        let subject = lookup(&self.catalog, subject_name)?;
        student.add_grade(subject, value)
    }

    /// Records a grade typed as text once the student, the subject and the
    /// enrollment have been resolved.
    pub fn add_grade_str(
        &mut self,
        id: StudentId,
        subject_name: &str,
        raw: &str,
    ) -> Result<Grade, RecordError> {
        let student = self.roster.find_by_id_mut(id)?;
        let subject = lookup(&self.catalog, subject_name)?;
        student.add_grade_str(subject, raw)
    }

    pub fn student_average(&self, id: StudentId) -> Result<f64, RecordError> {
        Ok(self.roster.find_by_id(id)?.overall_average())
    }

    pub fn report(&self) -> RosterReport {
        self.roster.report()
    }
}

fn lookup<'a>(catalog: &'a SubjectCatalog, name: &str) -> Result<&'a Subject, RecordError> {
    catalog.get(name).ok_or_else(|| RecordError::SubjectNotFound {
        name: name.to_string(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
