//! The result of a successful route query.

use serde::Serialize;

use super::Metric;

/// A computed route between two stations.
///
/// Produced fresh by each query and immutable once returned. Serializes
/// with camelCase field names (`totalDistance`, `noOfStations`, …), the
/// shape route-planning screens consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Ordered station names from source to destination, inclusive.
    pub path: Vec<String>,

    /// Total distance in meters along `path`.
    pub total_distance: u32,

    /// Total travel time in minutes along `path`.
    pub total_time: u32,

    /// Stations traveled, i.e. edges traversed (`path.len() - 1`).
    pub no_of_stations: u32,

    /// Number of line changes along `path`.
    pub transfers: u32,

    /// Fare for the trip (banded by `no_of_stations`, surcharged per
    /// transfer).
    pub fare: u32,

    /// The metric the path was optimized for. The other metric's total is
    /// still reported, for this same path.
    pub optimized_by: Metric,
}

impl Route {
    /// The first station on the path.
    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// The last station on the path.
    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}
