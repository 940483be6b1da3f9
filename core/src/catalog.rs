use tracing::debug;

use aula_common::utils::validation::contains_ignore_case;
use aula_common::{RecordError, Subject};

/// Subjects offered, in insertion order.
///
/// Names are unique: `add` compares them case-sensitively, while `remove`,
/// `get` and `search` ignore case.
#[derive(Debug, Clone, Default)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `subjects`, failing on the first duplicate name.
    pub fn from_subjects<I>(subjects: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = Subject>,
    {
        let mut catalog = Self::new();
        for subject in subjects {
            catalog.add(subject)?;
        }
        Ok(catalog)
    }

    pub fn add(&mut self, subject: Subject) -> Result<(), RecordError> {
        if self.subjects.iter().any(|s| s.name() == subject.name()) {
            return Err(RecordError::DuplicateSubject {
                name: subject.name().to_string(),
            });
        }
        debug!(subject = subject.name(), "subject added to catalog");
        self.subjects.push(subject);
        Ok(())
    }

    /// Removes every subject named `name` (ignoring case) and returns them.
    ///
    /// Enrollments referencing the name are not touched.
    pub fn remove(&mut self, name: &str) -> Result<Vec<Subject>, RecordError> {
        if !self.subjects.iter().any(|s| same_name(s, name)) {
            return Err(RecordError::SubjectNotFound {
                name: name.to_string(),
            });
        }
        let (removed, kept): (Vec<Subject>, Vec<Subject>) = std::mem::take(&mut self.subjects)
            .into_iter()
            .partition(|s| same_name(s, name));
        self.subjects = kept;
        debug!(subject = name, removed = removed.len(), "subject removed from catalog");
        Ok(removed)
    }

    pub fn search(&self, pattern: &str) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| contains_ignore_case(s.name(), pattern))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| same_name(s, name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Subject> {
        self.subjects.iter_mut().find(|s| same_name(s, name))
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

fn same_name(subject: &Subject, name: &str) -> bool {
    subject.name().to_lowercase() == name.to_lowercase()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
