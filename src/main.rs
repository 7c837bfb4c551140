mod cli;
mod config;
mod engine;
mod error;
mod report;
mod store;
mod types;

use crate::error::{GradeError, Result};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const TARGET_UNREACHED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let scheme = config::load_scheme(cli.grading.as_deref())?;
    let format = match cli.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };

    match cli.command {
        cli::Commands::Semester(cmd) => {
            let semester = store::load_semester(&cmd.file, &scheme)?;
            let result = engine::aggregate::aggregate_semester(&semester.subjects, &scheme)?;
            let view = report::ReportView::Semester {
                semester_id: semester.id,
                recorded: semester.recorded,
                result,
            };
            println!("{}", report::render(&view, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Cumulative(cmd) => {
            let mut semesters = Vec::with_capacity(cmd.files.len());
            for file in &cmd.files {
                semesters.push(store::load_semester(file, &scheme)?);
            }
            // Engine-level aggregation tolerates empty input; at the CLI a
            // CGPA over no subjects at all is a user mistake.
            if semesters.iter().all(|semester| semester.subjects.is_empty()) {
                return Err(GradeError::EmptyInput(
                    "no subjects in any semester file".to_string(),
                ));
            }
            let result = engine::aggregate::aggregate_cumulative(&semesters, &scheme)?;
            let view = report::ReportView::Cumulative { result };
            println!("{}", report::render(&view, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Critical(cmd) => {
            let semester = store::load_semester(&cmd.file, &scheme)?;
            let subject = semester
                .subjects
                .iter()
                .find(|subject| subject.id == cmd.subject)
                .ok_or_else(|| GradeError::NotFound(cmd.subject.clone()))?;
            let marks =
                engine::critical::find_critical_external_marks(subject.internal_marks, &scheme)?;
            let view = report::ReportView::Critical {
                subject_id: subject.id.clone(),
                internal_marks: subject.internal_marks,
                marks,
            };
            println!("{}", report::render(&view, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Target(cmd) => {
            let semester = store::load_semester(&cmd.file, &scheme)?;
            let plan = engine::subject_plan::find_minimal_external_marks_for_target(
                &semester.subjects,
                &cmd.subject,
                cmd.gpa,
                &scheme,
            )?;
            let possible = plan.possible;
            let view = report::ReportView::Target { plan };
            println!("{}", report::render(&view, format)?);
            if possible {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::TARGET_UNREACHED)
            }
        }
        cli::Commands::Plan(cmd) => {
            let semester = store::load_semester(&cmd.file, &scheme)?;
            let outcome = engine::greedy::greedy_plan(&semester.subjects, cmd.gpa, &scheme)?;
            let reached = outcome.target_reached;
            let view = report::ReportView::Plan { outcome };
            println!("{}", report::render(&view, format)?);
            if reached {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::TARGET_UNREACHED)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
