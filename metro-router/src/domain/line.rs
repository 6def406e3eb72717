//! Metro line identifiers and the station → line lookup.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A metro line.
///
/// The network has exactly three lines, so lines are a closed enum rather
/// than free-form labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Red,
    Blue,
    Green,
}

impl Line {
    /// Returns the line's display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Red => "Red",
            Line::Blue => "Blue",
            Line::Green => "Green",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Station name → canonical line lookup.
///
/// An interchange station belongs to more than one line, but this lookup
/// resolves each name to a single canonical line; the planner only uses it
/// to detect line changes along a path.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    inner: HashMap<String, Line>,
}

impl LineMap {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station on a line, replacing any previous entry.
    pub fn insert(&mut self, station: impl Into<String>, line: Line) {
        self.inner.insert(station.into(), line);
    }

    /// Look up the canonical line for a station.
    ///
    /// Returns `None` for stations not in the lookup.
    pub fn get(&self, station: &str) -> Option<Line> {
        self.inner.get(station).copied()
    }

    /// Returns the number of stations in the lookup.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
