use aula_common::config::Config;
use aula_core::{Academy, RosterReport};
use colored::*;

use crate::aprint;
use crate::terminal::{colors, format, print};

pub fn report(academy: &Academy, cfg: &Config) {
    print::header("reporte general", cfg.quiet);

    let report: RosterReport = academy.report();
    if report.is_empty() {
        print::no_results("estudiantes");
    }

    for (idx, student) in report.students.iter().enumerate() {
        print::tree_head(student.id, &student.name);
        print::as_tree_one_level(format::student_to_details(student));
        if idx + 1 != report.students.len() {
            aprint!();
        }
    }

    print_summary(&report, cfg);
}

fn print_summary(report: &RosterReport, cfg: &Config) {
    let output: String = format!(
        "{} {}",
        "Promedio general de la lista:".color(colors::TEXT_DEFAULT),
        format::average(report.overall_average)
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => print::print(&output),
    }
}
