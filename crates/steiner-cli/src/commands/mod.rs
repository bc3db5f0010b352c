// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. The main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod score;
pub mod solve;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use steiner_lib::{load_problem, Problem};

/// Read the problem from `path`, or from stdin when no path is given.
pub(crate) fn read_problem(path: Option<&Path>) -> Result<Problem> {
    match path {
        Some(path) => load_problem(path)
            .with_context(|| format!("failed to load problem from {}", path.display())),
        None => Problem::from_reader(io::stdin().lock())
            .context("failed to read problem from stdin"),
    }
}
