use std::path::PathBuf;

use clap::{Parser, Subcommand};
use riasec_tools::riasec::tools::sync;
use riasec_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

/// Default path of the flat question table, shared by both subcommands.
const DEFAULT_TABLE: &str = "expanded_career_quiz_questions.csv";
/// Default path of the exported model document.
const DEFAULT_MODEL: &str = "career_quiz_model.json";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    match cli.command {
        Command::ExportQuestions(args) => sync::export_questions(&args.output),
        Command::BuildModel(args) => sync::build_model(&args.input, &args.output),
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Prepare the career-quiz question table and model document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the built-in question bank as a flat CSV table.
    ExportQuestions(ExportQuestionsArgs),
    /// Build the quiz model document from the question table.
    BuildModel(BuildModelArgs),
}

#[derive(clap::Args)]
struct ExportQuestionsArgs {
    /// Output table path.
    #[arg(long, default_value = DEFAULT_TABLE)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct BuildModelArgs {
    /// Input table path.
    #[arg(long, default_value = DEFAULT_TABLE)]
    input: PathBuf,

    /// Output document path.
    #[arg(long, default_value = DEFAULT_MODEL)]
    output: PathBuf,
}
