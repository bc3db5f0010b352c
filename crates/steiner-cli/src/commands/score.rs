//! Score command handler: validate a solution and report its energy.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use steiner_lib::judge;

use super::read_problem;
use steiner_cli::output::{write_judgement, OutputFormat};

/// Arguments for the score command.
#[derive(Debug, Clone)]
pub struct ScoreCommandArgs {
    pub input: PathBuf,
    pub solution: PathBuf,
    pub format: OutputFormat,
}

/// Handle the score subcommand.
pub fn handle_score_command(args: &ScoreCommandArgs) -> Result<()> {
    let problem = read_problem(Some(&args.input))?;
    let text = fs::read_to_string(&args.solution)
        .with_context(|| format!("failed to read solution {}", args.solution.display()))?;

    let judgement = judge(&problem, &text)
        .with_context(|| format!("solution {} was rejected", args.solution.display()))?;
    tracing::info!(
        "accepted solution with energy {} (score {})",
        judgement.energy,
        judgement.score
    );

    write_judgement(&mut io::stdout().lock(), args.format, &judgement)
}
