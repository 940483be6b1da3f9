use aula_common::{ErrorKind, IdGenerator, RecordError, Student, StudentId, Subject};
use aula_core::StudentRoster;

use crate::fixtures::{ScriptedIds, academy_with_ids, madrid, sevilla, start_of_term};

#[test]
fn enrollment_lifecycle_through_academy() {
    let mut academy = academy_with_ids(&["Matemáticas", "Historia"], &[10, 11]);
    let juan = academy.register_student("Juan Pérez", 20, madrid()).unwrap();
    assert_eq!(juan, StudentId(10));

    academy.enroll(juan, "Matemáticas").unwrap();
    let err = academy.enroll(juan, "MATEMÁTICAS").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateEnrollment);

    academy.add_grade(juan, "Matemáticas", 6).unwrap();
    academy.add_grade(juan, "Matemáticas", 9).unwrap();
    let err = academy.add_grade(juan, "Historia", 5).unwrap_err();
    assert_eq!(
        err,
        RecordError::NotEnrolled {
            subject: "Historia".into()
        }
    );

    assert_eq!(academy.student_average(juan), Ok(7.5));

    let dropped = academy.unenroll(juan, "Matemáticas").unwrap().unwrap();
    assert_eq!(dropped.grades().len(), 2);
    assert_eq!(academy.student_average(juan), Ok(0.0));
}

#[test]
fn unenroll_is_a_reported_no_op_but_strict_variant_fails() {
    let history = Subject::new("Historia").unwrap();
    let mut ana = Student::new(StudentId(1), "Ana", 19, sevilla()).unwrap();

    assert!(ana.unenroll(&history).is_none());
    let err = ana.try_unenroll(&history).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotEnrolled);

    ana.enroll_on(&history, start_of_term()).unwrap();
    let enrollment = ana.try_unenroll(&history).unwrap();
    assert_eq!(enrollment.date_label(), "15 de septiembre de 2025");
}

#[test]
fn invalid_grade_leaves_enrollment_untouched() {
    let maths = Subject::new("Matemáticas").unwrap();
    let mut ana = Student::new(StudentId(1), "Ana", 19, sevilla()).unwrap();
    ana.enroll(&maths).unwrap();

    for value in [-1, 11, 100] {
        let err = ana.add_grade(&maths, value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert!(ana.enrollment("Matemáticas").unwrap().grades().is_empty());
}

#[test]
fn ids_are_never_reused() {
    let mut roster = StudentRoster::new();

    let first = roster.new_student("Ana", 20, madrid()).unwrap();
    let first = roster.add(first).unwrap();
    // Rejected names still spend an ID.
    assert!(roster.new_student("Ana 2", 20, madrid()).is_err());
    roster.remove(first).unwrap();

    let next = roster.new_student("Luis", 21, madrid()).unwrap();
    assert_eq!(roster.add(next), Ok(StudentId(3)));
}

#[test]
fn roster_refuses_a_second_student_with_a_taken_id() {
    let mut roster = StudentRoster::with_ids(Box::new(ScriptedIds::new(&[1])));
    let ana = roster.new_student("Ana", 20, madrid()).unwrap();
    let ana = roster.add(ana).unwrap();

    let luis = Student::new(ana, "Luis", 21, sevilla()).unwrap();
    assert_eq!(roster.add(luis).unwrap_err().kind(), ErrorKind::Duplicate);

    roster.remove(ana).unwrap();
    assert_eq!(roster.find_by_id(ana).unwrap_err().kind(), ErrorKind::NotFound);
    assert!(roster.is_empty());
}

#[test]
fn scripted_ids_continue_after_the_list() {
    let mut ids = ScriptedIds::new(&[7, 3]);
    let issued: Vec<StudentId> = (0..4).map(|_| ids.next_id()).collect();
    assert_eq!(
        issued,
        vec![StudentId(7), StudentId(3), StudentId(8), StudentId(9)]
    );
}

#[test]
fn removed_subject_freezes_existing_enrollments() {
    let mut academy = academy_with_ids(&["Historia", "Física"], &[1]);
    let id = academy.register_student("María López", 22, sevilla()).unwrap();
    academy.enroll(id, "Historia").unwrap();
    academy.add_grade(id, "Historia", 8).unwrap();

    let removed = academy.remove_subject("HISTORIA").unwrap();
    assert_eq!(removed.len(), 1);

    let student = academy.student(id).unwrap();
    assert!(student.is_enrolled("Historia"));
    assert_eq!(student.overall_average(), 8.0);

    assert_eq!(
        academy.unenroll(id, "Historia").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        academy.remove_subject("Historia").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
