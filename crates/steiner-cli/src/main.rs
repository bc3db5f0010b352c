mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::score::{handle_score_command, ScoreCommandArgs};
use commands::solve::{handle_solve_command, ModeArg, SolveCommandArgs};
use steiner_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Steiner Space Travel route planner")]
struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a tour for a problem and print the solution.
    Solve {
        /// Problem input file. Reads stdin when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Write the solution to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Routing mode used between consecutive stops.
        #[arg(long, value_enum, default_value_t = ModeArg::Exact)]
        mode: ModeArg,
    },
    /// Validate a solution against its problem and report energy and score.
    Score {
        /// Problem input file.
        #[arg(long, short)]
        input: PathBuf,
        /// Solution file to judge.
        #[arg(long, short)]
        solution: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            input,
            output,
            mode,
        } => handle_solve_command(&SolveCommandArgs {
            input,
            output,
            mode,
            format: cli.format,
        }),
        Command::Score { input, solution } => handle_score_command(&ScoreCommandArgs {
            input,
            solution,
            format: cli.format,
        }),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
