//! # Aula Core
//!
//! The record collections and the service the shell drives.
//!
//! * **[`catalog`]**: [`catalog::SubjectCatalog`], subjects unique by name.
//! * **[`roster`]**: [`roster::StudentRoster`], students unique by name, keyed by ID.
//! * **[`report`]**: the read-only report model built from a roster.
//! * **[`academy`]**: [`academy::Academy`], one roster plus one catalog, addressed by
//!   student ID and subject name.

pub mod academy;
pub mod catalog;
pub mod report;
pub mod roster;

pub use academy::Academy;
pub use catalog::SubjectCatalog;
pub use report::{EnrollmentLine, RosterReport, StudentReport};
pub use roster::StudentRoster;
