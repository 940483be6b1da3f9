use aula_common::records::round2;
use aula_common::{ErrorKind, Grade, Student, StudentId, Subject};
use aula_core::{StudentRoster, SubjectCatalog};
use proptest::prelude::*;

use crate::fixtures::madrid;

fn subject_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Z][a-z]{2,8}", 1..6).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn grades_in_range_are_accepted(value in 0i64..=10) {
        prop_assert_eq!(i64::from(Grade::new(value).unwrap().value()), value);
    }

    #[test]
    fn grades_out_of_range_are_validation_errors(value in prop_oneof![i64::MIN..0, 11i64..]) {
        prop_assert_eq!(Grade::new(value).unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn overall_average_is_mean_of_subject_means(
        names in subject_names(),
        grades in prop::collection::vec(prop::collection::vec(0i64..=10, 0..5), 6),
    ) {
        let mut student = Student::new(StudentId(1), "Ana", 20, madrid()).unwrap();
        let mut means = Vec::new();

        for (name, marks) in names.iter().zip(&grades) {
            let subject = Subject::new(name.as_str()).unwrap();
            student.enroll(&subject).unwrap();
            for mark in marks {
                student.add_grade(&subject, *mark).unwrap();
            }
            let mean = if marks.is_empty() {
                0.0
            } else {
                marks.iter().sum::<i64>() as f64 / marks.len() as f64
            };
            means.push(mean);
        }

        let expected = round2(means.iter().sum::<f64>() / means.len() as f64);
        prop_assert_eq!(student.overall_average(), expected);
        prop_assert!((0.0..=10.0).contains(&student.overall_average()));
    }

    #[test]
    fn catalog_never_holds_duplicate_names(names in prop::collection::vec("[A-Z][a-z]{1,4}", 0..20)) {
        let mut catalog = SubjectCatalog::new();
        for name in &names {
            let subject = Subject::new(name.as_str()).unwrap();
            let already = catalog.subjects().iter().any(|s| s.name() == name.as_str());
            let added = catalog.add(subject);
            prop_assert_eq!(added.is_err(), already);
        }

        let mut seen: Vec<&str> = catalog.subjects().iter().map(Subject::name).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn roster_ids_strictly_increase(count in 1usize..15, removals in prop::collection::vec(any::<bool>(), 15)) {
        let mut roster = StudentRoster::new();
        let mut issued = Vec::new();

        for idx in 0..count {
            let name = format!("Alumno {}", "x".repeat(idx + 1));
            let student = roster.new_student(name, 20, madrid()).unwrap();
            let id = roster.add(student).unwrap();
            if removals[idx] {
                roster.remove(id);
            }
            issued.push(id);
        }

        prop_assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
