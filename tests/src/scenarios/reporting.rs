use aula_common::StudentId;

use crate::fixtures::{academy_with_ids, madrid, sevilla};

#[test]
fn general_report_of_two_students() {
    let mut academy = academy_with_ids(&["Matemáticas", "Historia"], &[1, 2]);
    let juan = academy.register_student("Juan Pérez", 20, madrid()).unwrap();
    let maria = academy.register_student("María López", 22, sevilla()).unwrap();

    academy.enroll(juan, "Matemáticas").unwrap();
    academy.add_grade(juan, "Matemáticas", 9).unwrap();
    academy.enroll(maria, "Matemáticas").unwrap();
    academy.add_grade(maria, "Matemáticas", 7).unwrap();
    academy.enroll(maria, "Historia").unwrap();
    academy.add_grade(maria, "Historia", 8).unwrap();

    let report = academy.report();
    assert_eq!(report.students.len(), 2);
    assert_eq!(report.students[0].id, StudentId(1));
    assert_eq!(report.students[1].overall_average, 7.5);
    assert_eq!(report.overall_average, 8.25);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "ID: 1, Nombre: Juan Pérez, Edad: 20, Dirección: C/ Falsa, nº 123, Piso: 2A, Madrid, Madrid, 28080"
    );
    assert!(lines.contains(&"- Matemáticas: Calificaciones: 9 | Promedio: 9.00"));
    assert!(lines.contains(&"- Historia: Calificaciones: 8 | Promedio: 8.00"));
    assert_eq!(lines.last(), Some(&"Promedio general de la lista: 8.25"));
}

#[test]
fn enrollment_without_grades_counts_as_zero() {
    let mut academy = academy_with_ids(&["Matemáticas", "Historia"], &[1]);
    let id = academy.register_student("Ana", 30, madrid()).unwrap();
    academy.enroll(id, "Matemáticas").unwrap();
    academy.enroll(id, "Historia").unwrap();
    academy.add_grade(id, "Historia", 7).unwrap();

    assert_eq!(academy.student_average(id), Ok(3.5));
    assert_eq!(academy.report().overall_average, 3.5);
}

#[test]
fn student_average_is_rounded_but_list_average_is_not() {
    let mut academy = academy_with_ids(&["Historia", "Física", "Química"], &[1, 2]);
    let ana = academy.register_student("Ana", 30, madrid()).unwrap();
    let luis = academy.register_student("Luis", 31, madrid()).unwrap();

    for subject in ["Historia", "Física", "Química"] {
        academy.enroll(ana, subject).unwrap();
    }
    academy.add_grade(ana, "Historia", 10).unwrap();
    academy.enroll(luis, "Historia").unwrap();
    academy.add_grade(luis, "Historia", 5).unwrap();

    // 10 / 3 rounds to 3.33; (3.33 + 5) / 2 stays unrounded.
    assert_eq!(academy.student_average(ana), Ok(3.33));
    assert_eq!(academy.report().overall_average, (3.33 + 5.0) / 2.0);
}

#[test]
fn empty_roster_reports_zero() {
    let academy = academy_with_ids(&[], &[1]);
    let report = academy.report();
    assert!(report.is_empty());
    assert_eq!(report.overall_average, 0.0);
}
