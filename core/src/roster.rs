use tracing::debug;

use aula_common::utils::validation::contains_ignore_case;
use aula_common::{
    Address, Enrollment, Grade, IdGenerator, RecordError, SequentialIds, Student, StudentId,
    Subject,
};

use crate::report::{RosterReport, StudentReport};

/// Students in insertion order.
///
/// The roster issues student IDs through its [`IdGenerator`] and refuses two
/// students with exactly the same name or the same ID.
pub struct StudentRoster {
    students: Vec<Student>,
    ids: Box<dyn IdGenerator>,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::with_ids(Box::new(SequentialIds::new()))
    }

    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            students: Vec::new(),
            ids,
        }
    }

    /// Builds a student carrying the next ID.
    ///
    /// The ID is spent even if the name is rejected or the student is never
    /// added, so IDs are never reused.
    pub fn new_student(
        &mut self,
        name: impl Into<String>,
        age: i64,
        address: Address,
    ) -> Result<Student, RecordError> {
        let id = self.ids.next_id();
        Student::new(id, name, age, address)
    }

    pub fn add(&mut self, student: Student) -> Result<StudentId, RecordError> {
        let id = student.id();
        if self.students.iter().any(|s| s.id() == id) {
            return Err(RecordError::DuplicateStudentId { id });
        }
        if self.students.iter().any(|s| s.name() == student.name()) {
            return Err(RecordError::DuplicateStudent {
                name: student.name().to_string(),
            });
        }
        debug!(student = %id, name = student.name(), "student added to roster");
        self.students.push(student);
        Ok(id)
    }

    pub fn find_by_id(&self, id: StudentId) -> Result<&Student, RecordError> {
        self.students
            .iter()
            .find(|s| s.id() == id)
            .ok_or(RecordError::StudentNotFound { id })
    }

    pub fn find_by_id_mut(&mut self, id: StudentId) -> Result<&mut Student, RecordError> {
        self.students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(RecordError::StudentNotFound { id })
    }

    /// Removes the student with `id`. An unknown ID is a no-op.
    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let idx = self.students.iter().position(|s| s.id() == id)?;
        debug!(student = %id, "student removed from roster");
        Some(self.students.remove(idx))
    }

    pub fn search(&self, pattern: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| contains_ignore_case(s.name(), pattern))
            .collect()
    }

    pub fn enroll(&mut self, id: StudentId, subject: &Subject) -> Result<(), RecordError> {
        self.find_by_id_mut(id)?.enroll(subject)
    }

    pub fn unenroll(
        &mut self,
        id: StudentId,
        subject: &Subject,
    ) -> Result<Option<Enrollment>, RecordError> {
        Ok(self.find_by_id_mut(id)?.unenroll(subject))
    }

    pub fn add_grade(
        &mut self,
        id: StudentId,
        subject: &Subject,
        value: i64,
    ) -> Result<Grade, RecordError> {
        self.find_by_id_mut(id)?.add_grade(subject, value)
    }

    /// Mean of every student's overall average, `0.0` for an empty roster.
    pub fn overall_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: f64 = self.students.iter().map(Student::overall_average).sum();
        total / self.students.len() as f64
    }

    pub fn report(&self) -> RosterReport {
        RosterReport {
            students: self.students.iter().map(StudentReport::from).collect(),
            overall_average: self.overall_average(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for StudentRoster {
    fn default() -> Self {
        Self::new()
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
