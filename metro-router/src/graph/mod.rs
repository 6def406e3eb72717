//! The station graph.
//!
//! An in-memory adjacency-list graph of named stations. Edges are
//! undirected: every connection is stored as two directed entries with
//! identical weights. The graph is built once at startup and is read-only
//! for the lifetime of every query.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

/// A directed adjacency record: the neighbor plus the edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Neighboring station name.
    pub to: String,

    /// Distance to the neighbor in meters.
    pub distance_m: u32,

    /// Travel time to the neighbor in minutes.
    pub time_min: u32,
}

/// Adjacency-list graph of the metro network.
///
/// Membership and adjacency lookups are O(1) amortized. The vertex set is
/// kept in a `BTreeSet` so enumeration is deterministic (lexicographic),
/// which station pickers rely on.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    adjacency: HashMap<String, Vec<Edge>>,
    stations: BTreeSet<String>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an isolated station with no edges.
    ///
    /// No-op if the station is already known.
    pub fn add_station(&mut self, name: &str) {
        if self.stations.insert(name.to_owned()) {
            self.adjacency.entry(name.to_owned()).or_default();
        }
    }

    /// Insert a bidirectional connection between two stations.
    ///
    /// Both stations are registered in the vertex set if not already
    /// present, and the edge is stored in both directions with identical
    /// weights. A duplicate insert for the same ordered pair is a no-op.
    /// Weights must be positive; a zero weight is rejected and logged.
    pub fn add_edge(&mut self, from: &str, to: &str, distance_m: u32, time_min: u32) {
        if distance_m == 0 || time_min == 0 {
            debug!(from, to, distance_m, time_min, "rejecting edge with zero weight");
            return;
        }

        self.add_station(from);
        self.add_station(to);

        self.insert_directed(from, to, distance_m, time_min);
        self.insert_directed(to, from, distance_m, time_min);
    }

    /// Insert one direction of an edge, skipping duplicates.
    fn insert_directed(&mut self, from: &str, to: &str, distance_m: u32, time_min: u32) {
        let neighbors = self.adjacency.entry(from.to_owned()).or_default();

        // Duplicate detection by scanning the neighbor list; lists are
        // short (a station has at most a handful of neighbors).
        if neighbors.iter().any(|e| e.to == to) {
            return;
        }

        neighbors.push(Edge {
            to: to.to_owned(),
            distance_m,
            time_min,
        });
    }

    /// The adjacency list for a station.
    ///
    /// Returns an empty slice for unknown stations, never errors.
    pub fn neighbors(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a station is in the vertex set.
    pub fn has_station(&self, name: &str) -> bool {
        self.stations.contains(name)
    }

    /// All station names in lexicographic order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(String::as_str)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = StationGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(!graph.has_station("Ameerpet"));
        assert!(graph.neighbors("Ameerpet").is_empty());
    }

    #[test]
    fn add_edge_is_bidirectional() {
        let mut graph = StationGraph::new();
        graph.add_edge("Ameerpet", "Punjagutta", 1500, 3);

        assert_eq!(graph.len(), 2);
        assert!(graph.has_station("Ameerpet"));
        assert!(graph.has_station("Punjagutta"));

        let forward = graph.neighbors("Ameerpet");
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].to, "Punjagutta");
        assert_eq!(forward[0].distance_m, 1500);
        assert_eq!(forward[0].time_min, 3);

        let backward = graph.neighbors("Punjagutta");
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].to, "Ameerpet");
        assert_eq!(backward[0].distance_m, 1500);
        assert_eq!(backward[0].time_min, 3);
    }

    #[test]
    fn duplicate_edge_is_noop() {
        let mut graph = StationGraph::new();
        graph.add_edge("Ameerpet", "Punjagutta", 1500, 3);
        graph.add_edge("Ameerpet", "Punjagutta", 9999, 99);
        graph.add_edge("Punjagutta", "Ameerpet", 9999, 99);

        let forward = graph.neighbors("Ameerpet");
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].distance_m, 1500);

        let backward = graph.neighbors("Punjagutta");
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].distance_m, 1500);
    }

    #[test]
    fn zero_weight_edge_is_rejected() {
        let mut graph = StationGraph::new();
        graph.add_edge("Ameerpet", "Punjagutta", 0, 3);
        graph.add_edge("Ameerpet", "Punjagutta", 1500, 0);

        assert!(graph.is_empty());
        assert!(graph.neighbors("Ameerpet").is_empty());
    }

    #[test]
    fn add_station_registers_isolated_vertex() {
        let mut graph = StationGraph::new();
        graph.add_station("Depot");
        graph.add_station("Depot");

        assert_eq!(graph.len(), 1);
        assert!(graph.has_station("Depot"));
        assert!(graph.neighbors("Depot").is_empty());
    }

    #[test]
    fn add_station_keeps_existing_edges() {
        let mut graph = StationGraph::new();
        graph.add_edge("Ameerpet", "Punjagutta", 1500, 3);
        graph.add_station("Ameerpet");

        assert_eq!(graph.neighbors("Ameerpet").len(), 1);
    }

    #[test]
    fn stations_are_lexicographic() {
        let mut graph = StationGraph::new();
        graph.add_edge("Punjagutta", "Ameerpet", 1500, 3);
        graph.add_edge("Ameerpet", "Begumpet", 1200, 2);

        let names: Vec<&str> = graph.stations().collect();
        assert_eq!(names, vec!["Ameerpet", "Begumpet", "Punjagutta"]);
    }
}
