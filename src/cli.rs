use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gpatrack",
    version,
    about = "SGPA/CGPA tracking and grade-target planning CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Grading scheme TOML (default: ./grading.toml, else built-in scheme)
    #[arg(long, global = true)]
    pub grading: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, value_enum, global = true, default_value = "md")]
    pub format: ReportFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a semester's GPA from a semester file
    Semester(SemesterCommand),
    /// Compute the credit-weighted CGPA across semester files
    Cumulative(CumulativeCommand),
    /// Show the external marks needed to cross each grade boundary
    Critical(CriticalCommand),
    /// Find the minimal external marks on one subject for a target GPA
    Target(TargetCommand),
    /// Suggest a greedy sequence of mark raises toward a target GPA
    Plan(PlanCommand),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct SemesterCommand {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CumulativeCommand {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct CriticalCommand {
    pub file: PathBuf,

    /// Subject id within the semester file
    #[arg(long)]
    pub subject: String,
}

#[derive(Args)]
pub struct TargetCommand {
    pub file: PathBuf,

    /// Subject id within the semester file
    #[arg(long)]
    pub subject: String,

    /// Target semester GPA
    #[arg(long)]
    pub gpa: f64,
}

#[derive(Args)]
pub struct PlanCommand {
    pub file: PathBuf,

    /// Target semester GPA
    #[arg(long)]
    pub gpa: f64,
}
