use aula_common::config::Config;
use aula_core::Academy;

use super::{Flow, invalid_option, parse_option, show_menu};
use crate::success;
use crate::terminal::input::LineReader;
use crate::terminal::print;

const OPTIONS: [&str; 5] = [
    "Agregar asignatura",
    "Eliminar asignatura",
    "Buscar asignatura",
    "Calificar asignatura",
    "Volver",
];

pub(super) fn menu(
    academy: &mut Academy,
    input: &mut impl LineReader,
    cfg: &Config,
) -> anyhow::Result<Flow> {
    loop {
        show_menu("asignaturas", &OPTIONS, cfg);
        let choice = ask!(input, "Seleccione una opción: ");

        let flow = match parse_option(&choice) {
            Some(1) => add(academy, input)?,
            Some(2) => remove(academy, input)?,
            Some(3) => search(academy, input)?,
            Some(4) => grade(academy, input)?,
            Some(5) => return Ok(Flow::Continue),
            _ => invalid_option(),
        };

        if flow == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}

fn add(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let name = ask!(input, "Nombre de la asignatura: ");

    match academy.add_subject(name.trim()) {
        Ok(()) => success!("Asignatura {} agregada.", name.trim()),
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}

fn remove(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let name = ask!(input, "Nombre de la asignatura: ");

    match academy.remove_subject(name.trim()) {
        Ok(removed) => {
            for subject in removed {
                success!("Asignatura {} eliminada.", subject.name());
            }
        }
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}

fn search(academy: &Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let pattern = ask!(input, "Buscar: ");
    let found = academy.search_subjects(pattern.trim());

    if found.is_empty() {
        print::no_results("asignaturas");
    }
    for subject in found {
        print::print_status(subject.to_string());
    }
    Ok(Flow::Continue)
}

fn grade(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let name = ask!(input, "Nombre de la asignatura: ");
    let raw = ask!(input, "Calificación: ");

    match academy.grade_subject_str(name.trim(), &raw) {
        Ok(grade) => success!("Calificación {} registrada en {}.", grade, name.trim()),
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}
