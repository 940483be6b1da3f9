//! # Interactive Shell
//!
//! Numbered menus over one [`Academy`]. Every operation prints either a
//! success line or the error it failed with, and the loop carries on. The
//! shell ends on the exit option or when the input runs out.

use aula_common::StudentId;
use aula_common::config::Config;
use aula_core::Academy;

use crate::commands::report;
use crate::terminal::input::LineReader;
use crate::terminal::print;

/// Reads one answer, leaving the current menu when the input is exhausted.
macro_rules! ask {
    ($input:expr, $prompt:expr) => {
        match $input.read_line($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

mod students;
mod subjects;

/// Width the `key....: value` lines are padded to.
const KEY_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn shell(input: &mut impl LineReader, cfg: &Config) -> anyhow::Result<()> {
    let mut academy = Academy::default();
    run_with(&mut academy, input, cfg)
}

pub fn run_with(
    academy: &mut Academy,
    input: &mut impl LineReader,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::GLOBAL_KEY_WIDTH.set(KEY_WIDTH);

    loop {
        show_menu(
            "menú principal",
            &["Estudiantes", "Asignaturas", "Reporte general", "Salir"],
            cfg,
        );
        let Some(choice) = input.read_line("Seleccione una opción: ")? else {
            return Ok(());
        };

        let flow = match parse_option(&choice) {
            Some(1) => students::menu(academy, input, cfg)?,
            Some(2) => subjects::menu(academy, input, cfg)?,
            Some(3) => {
                report::report(academy, cfg);
                Flow::Continue
            }
            Some(4) => {
                print::success("Saliendo del programa.");
                Flow::Quit
            }
            _ => invalid_option(),
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn show_menu(title: &str, options: &[&str], cfg: &Config) {
    print::header(title, cfg.quiet);
    for (idx, option) in options.iter().enumerate() {
        print::print_status(format!("{}. {}", idx + 1, option));
    }
}

fn parse_option(choice: &str) -> Option<u32> {
    choice.trim().parse().ok()
}

fn invalid_option() -> Flow {
    print::warning("Opción inválida.");
    Flow::Continue
}

fn parse_id(raw: &str) -> Option<StudentId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            print::warning(&format!("ID inválido: '{}'.", raw.trim()));
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::input::ScriptedInput;

    fn run(lines: &[&str]) -> Academy {
        let mut academy = Academy::default();
        let mut input = ScriptedInput::new(lines.iter().copied());
        run_with(&mut academy, &mut input, &Config::default()).unwrap();
        academy
    }

    const JUAN: [&str; 8] = [
        "Juan Pérez", "20", "Falsa", "123", "", "28080", "Madrid", "Madrid",
    ];

    #[test]
    fn test_exit_option_stops_reading() {
        let academy = run(&["4", "2", "1", "Historia"]);
        assert!(academy.catalog().is_empty());
    }

    #[test]
    fn test_invalid_options_keep_looping() {
        let academy = run(&["9", "abc", "", "2", "1", "Historia", "5", "4"]);
        assert_eq!(academy.catalog().len(), 1);
    }

    #[test]
    fn test_eof_ends_session() {
        let academy = run(&["1", "1", "Ana"]);
        assert!(academy.roster().is_empty());
    }

    #[test]
    fn test_register_and_enroll_flow() {
        let mut lines = vec!["2", "1", "Matemáticas", "5", "1", "1"];
        lines.extend(&JUAN);
        lines.extend(["4", "1", "matemáticas"]);
        lines.extend(["5", "1", "Matemáticas", "9"]);
        lines.extend(["5", "1", "Matemáticas", "11"]);
        lines.extend(["8", "4"]);

        let academy = run(&lines);

        let student = academy.student(StudentId(1)).unwrap();
        assert_eq!(student.name(), "Juan Pérez");
        assert_eq!(student.address().floor(), "S/N");
        assert_eq!(student.overall_average(), 9.0);
    }

    #[test]
    fn test_grade_for_missing_enrollment_is_not_parsed() {
        let mut lines = vec!["2", "1", "Historia", "5", "1", "1"];
        lines.extend(&JUAN);
        // not enrolled yet, then enrolled with an out-of-range and a whole decimal grade
        lines.extend(["5", "1", "Historia", "11"]);
        lines.extend(["4", "1", "Historia"]);
        lines.extend(["5", "1", "Historia", "11"]);
        lines.extend(["5", "1", "Historia", "8.0"]);
        lines.extend(["8", "4"]);

        let academy = run(&lines);
        let student = academy.student(StudentId(1)).unwrap();
        let grades = student.enrollment("Historia").unwrap().grades();
        assert_eq!(grades.len(), 1);
        assert_eq!(student.overall_average(), 8.0);
    }

    #[test]
    fn test_unparsable_age_becomes_zero() {
        let mut juan = JUAN;
        juan[1] = "veinte";
        let mut lines = vec!["1", "1"];
        lines.extend(&juan);
        lines.extend(["8", "4"]);

        let academy = run(&lines);
        assert_eq!(academy.student(StudentId(1)).unwrap().age(), 0);
    }

    #[test]
    fn test_failures_do_not_end_the_shell() {
        let mut lines = vec!["1", "1"];
        lines.extend(&JUAN);
        // duplicate name
        lines.push("1");
        lines.extend(&JUAN);
        // malformed id, unknown id, unknown subject
        lines.extend(["2", "x", "2", "7", "4", "1", "Química", "8"]);
        lines.extend(["2", "1", "Historia", "5", "4"]);

        let academy = run(&lines);
        assert_eq!(academy.roster().len(), 1);
        assert_eq!(academy.catalog().len(), 1);
    }

    #[test]
    fn test_remove_student_and_subject() {
        let mut lines = vec!["2", "1", "Historia", "2", "historia", "5", "1", "1"];
        lines.extend(&JUAN);
        lines.extend(["2", "1", "8", "4"]);

        let academy = run(&lines);
        assert!(academy.roster().is_empty());
        assert!(academy.catalog().is_empty());
    }

    #[test]
    fn test_grade_subject_directly() {
        let academy = run(&[
            "2", "1", "Historia", "4", "historia", "6", "4", "Historia", "x", "5", "4",
        ]);
        let history = academy.catalog().get("Historia").unwrap();
        assert_eq!(history.grades().len(), 1);
        assert_eq!(history.average(), 6.0);
    }

    #[test]
    fn test_unenroll_flow() {
        let mut lines = vec!["2", "1", "Historia", "5", "1", "1"];
        lines.extend(&JUAN);
        lines.extend(["6", "1", "Historia"]);
        lines.extend(["4", "1", "Historia"]);
        lines.extend(["6", "1", "Historia"]);
        lines.extend(["8", "4"]);

        let academy = run(&lines);
        let student = academy.student(StudentId(1)).unwrap();
        assert_eq!(student.enrollment_count(), 0);
    }
}
