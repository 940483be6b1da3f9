use std::collections::VecDeque;

use aula_common::{Address, IdGenerator, StudentId, Subject};
use aula_core::{Academy, StudentRoster, SubjectCatalog};
use chrono::NaiveDate;

/// Hands out a fixed list of IDs, then continues after the largest of them.
pub struct ScriptedIds {
    ids: VecDeque<u32>,
    after: u32,
}

impl ScriptedIds {
    pub fn new(ids: &[u32]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
            after: ids.iter().copied().max().unwrap_or(0),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&mut self) -> StudentId {
        match self.ids.pop_front() {
            Some(id) => StudentId(id),
            None => {
                self.after = self.after.saturating_add(1);
                StudentId(self.after)
            }
        }
    }
}

pub fn madrid() -> Address {
    Address::new("Falsa", "123", Some("2A"), "28080", "Madrid", "Madrid")
}

pub fn sevilla() -> Address {
    Address::new("Real", "456", None, "41001", "Sevilla", "Sevilla")
}

pub fn start_of_term() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap_or_default()
}

pub fn catalog(names: &[&str]) -> SubjectCatalog {
    let subjects = names.iter().filter_map(|name| Subject::new(*name).ok());
    SubjectCatalog::from_subjects(subjects).unwrap_or_default()
}

/// An academy with the given subjects and a roster issuing `ids`.
pub fn academy_with_ids(subjects: &[&str], ids: &[u32]) -> Academy {
    let roster = StudentRoster::with_ids(Box::new(ScriptedIds::new(ids)));
    Academy::new(roster, catalog(subjects))
}
