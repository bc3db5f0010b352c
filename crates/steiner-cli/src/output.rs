//! Output formatting for planned tours and judgements.
//!
//! Text output follows the line-oriented solution format consumed by
//! visualisers and the judge; JSON output serialises the library summaries.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use steiner_lib::{Graph, Judgement, RouteSummary, Solution, Tour};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented solution format.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

/// Write a planned tour in the requested format.
pub fn write_tour<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    graph: &Graph,
    tour: &Tour,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let solution = Solution::from_tour(graph, tour)?;
            solution
                .write_to(&mut *writer)
                .context("failed to write solution")?;
        }
        OutputFormat::Json => {
            let summary = RouteSummary::from_tour(graph, tour)?;
            writeln!(writer, "{}", summary.to_json()?).context("failed to write summary")?;
        }
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Write a judgement in the requested format.
pub fn write_judgement<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    judgement: &Judgement,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "visits: {}", judgement.visits)?;
            writeln!(writer, "energy: {}", judgement.energy)?;
            writeln!(writer, "score: {}", judgement.score)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(judgement)
                .context("failed to serialise judgement")?;
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use steiner_lib::{plan_problem, Problem, TourRequest};

    #[test]
    fn text_tour_matches_solution_format() {
        let problem = Problem::parse("2 8\n0 0\n1000 1000\n").unwrap();
        let (graph, tour) = plan_problem(&problem, &TourRequest::direct()).unwrap();
        let mut buffer = Vec::new();
        write_tour(&mut buffer, OutputFormat::Text, &graph, &tour).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("3\n1 1\n1 2\n1 1\n"));
    }

    #[test]
    fn json_judgement_has_score() {
        let judgement = Judgement {
            visits: 3,
            energy: 0,
            score: 1_000_000,
        };
        let mut buffer = Vec::new();
        write_judgement(&mut buffer, OutputFormat::Json, &judgement).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["score"], 1_000_000);
    }
}
