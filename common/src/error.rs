//! # Record Errors
//!
//! Every invariant violation in the record model surfaces as a [`RecordError`].
//! Errors are raised at the call that would break the invariant, before any
//! state is touched.

use thiserror::Error;

use crate::ids::StudentId;

/// Coarse classification of a [`RecordError`], used by callers that only care
/// about the category (e.g. the shell choosing a message prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    DuplicateEnrollment,
    NotFound,
    NotEnrolled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("El nombre '{name}' solo debe contener letras y espacios.")]
    InvalidStudentName { name: String },

    #[error("El nombre de la asignatura '{name}' solo debe contener letras, números romanos y espacios.")]
    InvalidSubjectName { name: String },

    #[error("La calificación debe ser un entero entre 0 y 10 (recibido: {value}).")]
    InvalidGrade { value: String },

    #[error("No se permiten duplicados en la lista de estudiantes: '{name}'.")]
    DuplicateStudent { name: String },

    #[error("Ya existe un estudiante con el ID {id}.")]
    DuplicateStudentId { id: StudentId },

    #[error("Ya existe la asignatura '{name}'.")]
    DuplicateSubject { name: String },

    #[error("El estudiante ya está matriculado en {subject}.")]
    AlreadyEnrolled { subject: String },

    #[error("Estudiante no encontrado (ID: {id}).")]
    StudentNotFound { id: StudentId },

    #[error("La asignatura '{name}' no se encuentra en la lista.")]
    SubjectNotFound { name: String },

    #[error("El estudiante no está matriculado en {subject}.")]
    NotEnrolled { subject: String },
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStudentName { .. }
            | Self::InvalidSubjectName { .. }
            | Self::InvalidGrade { .. } => ErrorKind::Validation,
            Self::DuplicateStudent { .. }
            | Self::DuplicateStudentId { .. }
            | Self::DuplicateSubject { .. } => ErrorKind::Duplicate,
            Self::AlreadyEnrolled { .. } => ErrorKind::DuplicateEnrollment,
            Self::StudentNotFound { .. } | Self::SubjectNotFound { .. } => ErrorKind::NotFound,
            Self::NotEnrolled { .. } => ErrorKind::NotEnrolled,
        }
    }

    pub fn invalid_grade(value: impl ToString) -> Self {
        Self::InvalidGrade {
            value: value.to_string(),
        }
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
