//! # Aula Common
//!
//! Shared building blocks for the `aula` workspace.
//!
//! * **[`records`]**: the entities and value objects (`Address`, `Subject`, `Student`).
//! * **[`error`]**: the single error type every fallible operation returns.
//! * **[`ids`]**: the student ID generator port and its sequential implementation.
//! * **[`config`]**: runtime options shared by the binary and its helpers.
//! * **[`utils`]**: validation patterns and date rendering.

pub mod config;
pub mod error;
pub mod ids;
pub mod records;
pub mod utils;

pub use error::{ErrorKind, RecordError};
pub use ids::{IdGenerator, SequentialIds, StudentId};
pub use records::address::Address;
pub use records::grade::Grade;
pub use records::student::{Enrollment, Student};
pub use records::subject::Subject;
