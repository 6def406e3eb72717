//! The optimization metric for a route query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which edge weight the planner minimizes.
///
/// Serializes as `"distance"` / `"time"`, the values route-planning
/// screens send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Minimize total distance in meters.
    Distance,
    /// Minimize total travel time in minutes.
    Time,
}

impl Metric {
    /// Returns the metric's wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
