use crate::terminal::colors;
use aula_core::{EnrollmentLine, StudentReport};
use colored::*;

type Detail = (String, ColoredString);

/// Two decimals, the way every average is shown.
pub fn average(value: f64) -> ColoredString {
    format!("{:.2}", value).color(colors::ACCENT).bold()
}

pub fn enrollment_to_detail(line: &EnrollmentLine) -> Detail {
    let grades: String = if line.grades.is_empty() {
        String::from("sin calificaciones")
    } else {
        line.joined_grades()
    };
    let value = format!(
        "{} {} {} {}",
        grades.color(colors::GRADE),
        "| Promedio:".color(colors::SEPARATOR),
        average(line.average),
        format!("(desde el {})", line.enrolled_on).color(colors::SEPARATOR)
    );
    (line.subject.clone(), value.normal())
}

/// Personal data first, then one detail per enrollment.
pub fn student_to_details(student: &StudentReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Edad".to_string(), student.age.to_string().normal()),
        ("Dirección".to_string(), student.address.as_str().normal()),
    ];

    details.push(("Promedio general".to_string(), average(student.overall_average)));
    details.extend(student.enrollments.iter().map(enrollment_to_detail));
    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
