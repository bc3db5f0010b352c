use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Upper bound on the planet buffer reserved from an untrusted header.
const MAX_PREALLOCATED_PLANETS: usize = 4096;

/// Smallest coordinate on the map plane.
pub const MIN_COORDINATE: i64 = 0;
/// Largest coordinate on the map plane.
pub const MAX_COORDINATE: i64 = 1000;

/// Integer energy unit used by every cost in the planner.
pub type Energy = i64;

/// Integer coordinates on the map plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn dist_sq(&self, other: &Self) -> Energy {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Parsed problem input: the planets to visit plus the declared station count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub planets: Vec<Point>,
    /// Station count announced in the header. A solution for this problem
    /// must list exactly this many stations.
    pub station_hint: usize,
}

impl Problem {
    pub fn new(planets: Vec<Point>, station_hint: usize) -> Self {
        Self {
            planets,
            station_hint,
        }
    }

    /// Number of planets in the problem.
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Parse the `n m` header followed by `n` coordinate pairs.
    ///
    /// Tokens are whitespace separated, so line breaks and blank lines are not
    /// significant. Trailing tokens after the last coordinate are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);

        let n = tokens.next_int("planet count")?;
        if n <= 0 {
            return Err(Error::invalid_input(format!(
                "planet count must be positive, got {n}"
            )));
        }
        let m = tokens.next_int("station count")?;
        if m < 0 {
            return Err(Error::invalid_input(format!(
                "station count must not be negative, got {m}"
            )));
        }

        let mut planets = Vec::with_capacity((n as usize).min(MAX_PREALLOCATED_PLANETS));
        for index in 0..n {
            let x = tokens.next_coordinate(&format!("x coordinate of planet {}", index + 1))?;
            let y = tokens.next_coordinate(&format!("y coordinate of planet {}", index + 1))?;
            planets.push(Point::new(x, y));
        }

        if let Some(extra) = tokens.peek() {
            return Err(Error::invalid_input(format!(
                "unexpected trailing token '{extra}' after {n} planets"
            )));
        }

        debug!(planets = planets.len(), station_hint = m, "parsed problem input");
        Ok(Self::new(planets, m as usize))
    }

    /// Read and parse a problem from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

/// Load a problem from a file on disk.
pub fn load_problem(path: &Path) -> Result<Problem> {
    debug!("loading problem from {}", path.display());
    let text = fs::read_to_string(path)?;
    Problem::parse(&text)
}

/// Whitespace tokenizer shared by the problem and solution parsers.
pub(crate) struct Tokens<'a> {
    inner: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
        }
    }

    pub(crate) fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    pub(crate) fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| Error::invalid_input(format!("missing {what}")))?;
        token
            .parse::<i64>()
            .map_err(|_| Error::invalid_input(format!("{what} is not an integer: '{token}'")))
    }

    /// Read an integer that must lie on the map plane.
    pub(crate) fn next_coordinate(&mut self, what: &str) -> Result<i64> {
        let value = self.next_int(what)?;
        if !on_map(value) {
            return Err(Error::invalid_input(format!(
                "{what} is outside {MIN_COORDINATE}..={MAX_COORDINATE}: {value}"
            )));
        }
        Ok(value)
    }
}

pub(crate) fn on_map(value: i64) -> bool {
    (MIN_COORDINATE..=MAX_COORDINATE).contains(&value)
}
