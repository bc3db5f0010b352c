//! Solution checking and scoring.
//!
//! A solution places the stations and lists the visits; the judge verifies
//! the output constraints and reports the energy spent and the derived score.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{edge_energy, NodeKind};
use crate::output::{Solution, Visit, VisitKind};
use crate::problem::{on_map, Energy, Point, Problem, Tokens, MAX_COORDINATE, MIN_COORDINATE};

/// Largest number of visits a solution may list.
pub const MAX_VISITS: usize = 100_000;

/// Energy and score of an accepted solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Judgement {
    pub visits: usize,
    pub energy: Energy,
    pub score: i64,
}

/// Parse a solution in the text output format.
///
/// The number of station lines is taken from the problem's station count.
pub fn parse_solution(text: &str, problem: &Problem) -> Result<Solution> {
    let mut tokens = Tokens::new(text);

    let mut stations = Vec::new();
    for index in 0..problem.station_hint {
        let x = tokens.next_int(&format!("x coordinate of station {}", index + 1))?;
        let y = tokens.next_int(&format!("y coordinate of station {}", index + 1))?;
        stations.push(Point::new(x, y));
    }

    let count = tokens.next_int("visit count")?;
    if !(1..=MAX_VISITS as i64).contains(&count) {
        return Err(Error::invalid_solution(format!(
            "visit count must be between 1 and {MAX_VISITS}, got {count}"
        )));
    }

    let mut visits = Vec::with_capacity(count as usize);
    for entry in 1..=count {
        let code = tokens.next_int(&format!("kind of visit {entry}"))?;
        let kind = VisitKind::from_code(code).ok_or_else(|| {
            Error::invalid_solution(format!("visit {entry} has unknown kind {code}"))
        })?;
        let index = tokens.next_int(&format!("index of visit {entry}"))?;
        if index < 1 {
            return Err(Error::invalid_solution(format!(
                "visit {entry} has non-positive index {index}"
            )));
        }
        visits.push(Visit {
            kind,
            index: (index - 1) as usize,
        });
    }

    if let Some(extra) = tokens.peek() {
        return Err(Error::invalid_solution(format!(
            "unexpected trailing token '{extra}' after {count} visits"
        )));
    }

    Ok(Solution { stations, visits })
}

/// Verify that `solution` satisfies every output constraint for `problem`.
pub fn check_solution(problem: &Problem, solution: &Solution) -> Result<()> {
    if solution.stations.len() != problem.station_hint {
        return Err(Error::invalid_solution(format!(
            "expected {} stations, got {}",
            problem.station_hint,
            solution.stations.len()
        )));
    }

    for (index, station) in solution.stations.iter().enumerate() {
        if !on_map(station.x) || !on_map(station.y) {
            return Err(Error::invalid_solution(format!(
                "station {} at ({}, {}) lies outside {MIN_COORDINATE}..={MAX_COORDINATE}",
                index + 1,
                station.x,
                station.y
            )));
        }
    }

    if solution.visits.is_empty() || solution.visits.len() > MAX_VISITS {
        return Err(Error::invalid_solution(format!(
            "visit count must be between 1 and {MAX_VISITS}, got {}",
            solution.visits.len()
        )));
    }

    let mut visited = vec![false; problem.planet_count()];
    for (position, visit) in solution.visits.iter().enumerate() {
        let limit = match visit.kind {
            VisitKind::Planet => problem.planet_count(),
            VisitKind::Station => solution.stations.len(),
        };
        if visit.index >= limit {
            return Err(Error::invalid_solution(format!(
                "visit {} references {:?} {} but only {} exist",
                position + 1,
                visit.kind,
                visit.index + 1,
                limit
            )));
        }
        if visit.kind == VisitKind::Planet {
            visited[visit.index] = true;
        }
    }

    if let Some(missing) = visited.iter().position(|&seen| !seen) {
        return Err(Error::invalid_solution(format!(
            "planet {} is never visited",
            missing + 1
        )));
    }

    let origin = Visit::planet(0);
    if solution.visits.first() != Some(&origin) {
        return Err(Error::invalid_solution("route must start at planet 1"));
    }
    if solution.visits.last() != Some(&origin) {
        return Err(Error::invalid_solution("route must end at planet 1"));
    }

    Ok(())
}

/// Total energy spent along the solution's visits.
///
/// Expects a solution that passed [`check_solution`].
pub fn calc_energy(problem: &Problem, solution: &Solution) -> Energy {
    let locate = |visit: &Visit| match visit.kind {
        VisitKind::Planet => (problem.planets[visit.index], NodeKind::Planet),
        VisitKind::Station => (solution.stations[visit.index], NodeKind::Station),
    };

    solution
        .visits
        .windows(2)
        .map(|pair| {
            let (from, from_kind) = locate(&pair[0]);
            let (to, to_kind) = locate(&pair[1]);
            edge_energy(from, from_kind, to, to_kind)
        })
        .sum()
}

/// Score for a given energy: `round(1e9 / (1e3 + sqrt(energy)))`.
pub fn calc_score(energy: Energy) -> i64 {
    let score = 1e9 / (1e3 + (energy.max(0) as f64).sqrt());
    score.round() as i64
}

/// Parse, check and score a solution text.
pub fn judge(problem: &Problem, text: &str) -> Result<Judgement> {
    let solution = parse_solution(text, problem)?;
    check_solution(problem, &solution)?;
    let energy = calc_energy(problem, &solution);
    let score = calc_score(energy);
    debug!(visits = solution.visits.len(), energy, score, "judged solution");
    Ok(Judgement {
        visits: solution.visits.len(),
        energy,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = "300 300\n300 500\n300 700\n500 300\n500 700\n700 300\n700 500\n700 700\n";

    fn problem() -> Problem {
        Problem::new(vec![Point::new(0, 0), Point::new(1000, 1000)], 8)
    }

    #[test]
    fn score_of_zero_energy_is_maximal() {
        assert_eq!(calc_score(0), 1_000_000);
        // sqrt(1_000_000) = 1_000 -> 1e9 / 2e3
        assert_eq!(calc_score(1_000_000), 500_000);
    }

    #[test]
    fn judges_direct_route() {
        let text = format!("{STATIONS}3\n1 1\n1 2\n1 1\n");
        let judgement = judge(&problem(), &text).expect("valid solution");
        // 2_000_000 * 25 each way
        assert_eq!(judgement.energy, 100_000_000);
        assert_eq!(judgement.visits, 3);
        assert_eq!(judgement.score, calc_score(100_000_000));
    }

    #[test]
    fn station_hops_use_reduced_factor() {
        let text = format!("{STATIONS}5\n1 1\n2 1\n1 2\n2 1\n1 1\n");
        let judgement = judge(&problem(), &text).expect("valid solution");
        // (0,0)-(300,300): 180_000 * 5; (300,300)-(1000,1000): 980_000 * 5
        assert_eq!(judgement.energy, 2 * (900_000 + 4_900_000));
    }

    #[test]
    fn rejects_route_not_starting_at_origin() {
        let text = format!("{STATIONS}3\n1 2\n1 1\n1 1\n");
        let error = judge(&problem(), &text).expect_err("bad start");
        assert!(error.to_string().contains("start at planet 1"));
    }

    #[test]
    fn rejects_route_not_ending_at_origin() {
        let text = format!("{STATIONS}2\n1 1\n1 2\n");
        let error = judge(&problem(), &text).expect_err("bad end");
        assert!(error.to_string().contains("end at planet 1"));
    }

    #[test]
    fn rejects_missing_planet() {
        let text = format!("{STATIONS}2\n1 1\n1 1\n");
        let error = judge(&problem(), &text).expect_err("planet 2 missing");
        assert!(error.to_string().contains("planet 2 is never visited"));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let text = format!("{STATIONS}3\n1 1\n2 9\n1 1\n");
        let error = judge(&problem(), &text).expect_err("station 9");
        assert!(matches!(error, Error::InvalidSolution { .. }));
    }

    #[test]
    fn rejects_station_outside_map() {
        let text = STATIONS.replacen("300 300", "1001 300", 1) + "3\n1 1\n1 2\n1 1\n";
        let error = judge(&problem(), &text).expect_err("station outside");
        assert!(error.to_string().contains("station 1"));
    }

    #[test]
    fn rejects_unknown_kind() {
        let text = format!("{STATIONS}3\n1 1\n3 1\n1 1\n");
        let error = judge(&problem(), &text).expect_err("kind 3");
        assert!(error.to_string().contains("unknown kind 3"));
    }

    #[test]
    fn rejects_zero_visits() {
        let text = format!("{STATIONS}0\n");
        assert!(judge(&problem(), &text).is_err());
    }
}
