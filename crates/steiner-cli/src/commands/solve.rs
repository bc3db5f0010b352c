//! Solve command handler for planning a tour over the input planets.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;

use steiner_lib::{plan_problem, RoutingMode, StationLayout, TourRequest};

use super::read_problem;
use steiner_cli::output::{write_tour, OutputFormat};

/// Routing mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Shortest-path legs that may pass through relay stations.
    #[default]
    Exact,
    /// Direct hops between planets.
    Direct,
}

impl From<ModeArg> for RoutingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => RoutingMode::Exact,
            ModeArg::Direct => RoutingMode::Direct,
        }
    }
}

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveCommandArgs {
    /// Problem input file; stdin when absent.
    pub input: Option<PathBuf>,
    /// Destination file; stdout when absent.
    pub output: Option<PathBuf>,
    pub mode: ModeArg,
    pub format: OutputFormat,
}

impl SolveCommandArgs {
    /// Convert CLI args to a library TourRequest.
    pub fn to_request(&self) -> TourRequest {
        TourRequest {
            mode: self.mode.into(),
            layout: StationLayout::default(),
        }
    }
}

/// Handle the solve subcommand.
pub fn handle_solve_command(args: &SolveCommandArgs) -> Result<()> {
    let problem = read_problem(args.input.as_deref())?;
    let request = args.to_request();

    let (graph, tour) = plan_problem(&problem, &request).context("failed to plan tour")?;
    tracing::info!(
        "planned {} tour over {} planets: {} entries, energy {}",
        tour.mode,
        graph.planet_count(),
        tour.len(),
        tour.energy
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_tour(&mut writer, args.format, &graph, &tour)
        }
        None => write_tour(&mut io::stdout().lock(), args.format, &graph, &tour),
    }
}
