use aula_common::Address;
use aula_common::config::Config;
use aula_common::records::student::parse_age;
use aula_core::Academy;

use super::{Flow, invalid_option, parse_id, parse_option, show_menu};
use crate::success;
use crate::terminal::input::LineReader;
use crate::terminal::{format, print};

const OPTIONS: [&str; 8] = [
    "Agregar estudiante",
    "Eliminar estudiante",
    "Buscar estudiante",
    "Matricular en asignatura",
    "Calificar asignatura",
    "Desmatricular de asignatura",
    "Promedio del estudiante",
    "Volver",
];

pub(super) fn menu(
    academy: &mut Academy,
    input: &mut impl LineReader,
    cfg: &Config,
) -> anyhow::Result<Flow> {
    loop {
        show_menu("estudiantes", &OPTIONS, cfg);
        let choice = ask!(input, "Seleccione una opción: ");

        let flow = match parse_option(&choice) {
            Some(1) => add(academy, input)?,
            Some(2) => remove(academy, input)?,
            Some(3) => search(academy, input)?,
            Some(4) => enroll(academy, input)?,
            Some(5) => grade(academy, input)?,
            Some(6) => unenroll(academy, input)?,
            Some(7) => average(academy, input)?,
            Some(8) => return Ok(Flow::Continue),
            _ => invalid_option(),
        };

        if flow == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}

fn add(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let name = ask!(input, "Nombre: ");
    let age = parse_age(&ask!(input, "Edad: "));
    let street = ask!(input, "Calle: ");
    let number = ask!(input, "Número: ");
    let floor = ask!(input, "Piso (opcional): ");
    let postal_code = ask!(input, "Código postal: ");
    let province = ask!(input, "Provincia: ");
    let locality = ask!(input, "Localidad: ");

    let address = Address::new(
        street,
        number,
        Some(floor.as_str()),
        postal_code.trim(),
        province,
        locality,
    );

    match academy.register_student(name.trim(), age, address) {
        Ok(id) => success!("Estudiante {} agregado con ID {}.", name.trim(), id),
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}

fn remove(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let Some(id) = parse_id(&ask!(input, "ID del estudiante: ")) else {
        return Ok(Flow::Continue);
    };

    match academy.remove_student(id) {
        Some(student) => success!("Estudiante {} eliminado.", student.name()),
        None => print::warning(&format!("No existe ningún estudiante con ID {}.", id)),
    }
    Ok(Flow::Continue)
}

fn search(academy: &Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let pattern = ask!(input, "Buscar: ");
    let found = academy.search_students(pattern.trim());

    if found.is_empty() {
        print::no_results("estudiantes");
    }
    for student in found {
        print::print_status(student.to_string());
    }
    Ok(Flow::Continue)
}

fn enroll(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let Some(id) = parse_id(&ask!(input, "ID del estudiante: ")) else {
        return Ok(Flow::Continue);
    };
    let subject = ask!(input, "Asignatura: ");

    if let Err(err) = academy.enroll(id, subject.trim()) {
        print::failure(err);
    }
    Ok(Flow::Continue)
}

fn grade(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let Some(id) = parse_id(&ask!(input, "ID del estudiante: ")) else {
        return Ok(Flow::Continue);
    };
    let subject = ask!(input, "Asignatura: ");
    let raw = ask!(input, "Calificación: ");

    match academy.add_grade_str(id, subject.trim(), &raw) {
        Ok(grade) => success!("Calificación {} registrada en {}.", grade, subject.trim()),
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}

fn unenroll(academy: &mut Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let Some(id) = parse_id(&ask!(input, "ID del estudiante: ")) else {
        return Ok(Flow::Continue);
    };
    let subject = ask!(input, "Asignatura: ");

    // Not being enrolled is already reported as a warning.
    if let Err(err) = academy.unenroll(id, subject.trim()) {
        print::failure(err);
    }
    Ok(Flow::Continue)
}

fn average(academy: &Academy, input: &mut impl LineReader) -> anyhow::Result<Flow> {
    let Some(id) = parse_id(&ask!(input, "ID del estudiante: ")) else {
        return Ok(Flow::Continue);
    };

    match academy.student(id) {
        Ok(student) => {
            print::aligned_line("Estudiante", student.name());
            print::aligned_line("Promedio", format::average(student.overall_average()));
        }
        Err(err) => print::failure(err),
    }
    Ok(Flow::Continue)
}
