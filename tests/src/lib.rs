//! Cross-crate scenarios for the `aula` workspace.
//!
//! [`fixtures`] builds the records the scenarios share; the scenarios
//! themselves only compile under `cargo test`.

pub mod fixtures;

#[cfg(test)]
mod scenarios;
