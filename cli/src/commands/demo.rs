use aula_common::config::Config;
use aula_common::{Address, RecordError};
use aula_core::Academy;

use crate::commands::report;
use crate::success;

/// Loads the sample records used to try the tool out.
pub fn sample_academy() -> Result<Academy, RecordError> {
    let mut academy = Academy::default();

    for subject in ["Matemáticas", "Historia", "Física"] {
        academy.add_subject(subject)?;
    }

    let juan = academy.register_student(
        "Juan Pérez",
        20,
        Address::new("Falsa", "123", None, "28080", "Madrid", "Madrid"),
    )?;
    let maria = academy.register_student(
        "María López",
        22,
        Address::new("Real", "456", Some("2B"), "41001", "Sevilla", "Sevilla"),
    )?;

    academy.enroll(juan, "Matemáticas")?;
    academy.add_grade(juan, "Matemáticas", 9)?;

    academy.enroll(maria, "Matemáticas")?;
    academy.add_grade(maria, "Matemáticas", 7)?;
    academy.enroll(maria, "Historia")?;
    academy.add_grade(maria, "Historia", 8)?;

    Ok(academy)
}

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let academy = sample_academy()?;
    success!(
        "{} estudiantes y {} asignaturas cargados",
        academy.roster().len(),
        academy.catalog().len()
    );
    report::report(&academy, cfg);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
