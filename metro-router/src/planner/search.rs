//! Dijkstra shortest-path search over the station graph.
//!
//! Finds the minimum-weight path between two named stations under a
//! caller-selected metric, then derives the trip metadata (transfers and
//! fare) for the winning path.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{LineMap, Metric, Route, RouteError};
use crate::graph::StationGraph;

use super::fare::{FareSchedule, count_transfers};

/// Computes routes over a shared, read-only station graph.
///
/// The graph and line lookup are built once at startup; every query
/// allocates its own working state, so a `RouteFinder` can serve queries
/// from multiple threads without locking.
#[derive(Debug, Clone)]
pub struct RouteFinder {
    graph: Arc<StationGraph>,
    lines: LineMap,
    fares: FareSchedule,
}

impl RouteFinder {
    /// Create a route finder over the given network.
    pub fn new(graph: Arc<StationGraph>, lines: LineMap, fares: FareSchedule) -> Self {
        Self {
            graph,
            lines,
            fares,
        }
    }

    /// The underlying station graph.
    pub fn graph(&self) -> &StationGraph {
        &self.graph
    }

    /// Find the minimum-weight path from `source` to `destination` under
    /// `metric`.
    ///
    /// Both weights are tracked along the way, so the returned route
    /// reports accurate totals for the non-selected metric too — for this
    /// same path, not an independently optimal one. When two paths tie on
    /// the selected metric, the one with the smaller non-selected total
    /// wins, so equal-cost ties resolve identically in both directions.
    ///
    /// All failures come back as [`RouteError`] values: unknown stations,
    /// equal endpoints, or no path between disconnected components.
    pub fn find_shortest_path(
        &self,
        source: &str,
        destination: &str,
        metric: Metric,
    ) -> Result<Route, RouteError> {
        if !self.graph.has_station(source) {
            return Err(RouteError::InvalidStation(source.to_owned()));
        }
        if !self.graph.has_station(destination) {
            return Err(RouteError::InvalidStation(destination.to_owned()));
        }
        if source == destination {
            return Err(RouteError::SameStation);
        }

        let outcome = match dijkstra(&self.graph, source, destination, metric) {
            Some(outcome) => outcome,
            None => {
                debug!(source, destination, "no route between components");
                return Err(RouteError::NoRoute {
                    from: source.to_owned(),
                    to: destination.to_owned(),
                });
            }
        };

        let transfers = count_transfers(&outcome.path, &self.lines);
        let no_of_stations = (outcome.path.len() - 1) as u32;
        let fare = self.fares.fare(no_of_stations, transfers);

        debug!(
            source,
            destination,
            metric = %metric,
            stations = no_of_stations,
            transfers,
            fare,
            "route found"
        );

        Ok(Route {
            path: outcome.path,
            total_distance: outcome.total_distance,
            total_time: outcome.total_time,
            no_of_stations,
            transfers,
            fare,
            optimized_by: metric,
        })
    }
}

/// Accumulated weights along the best-known path to a station.
#[derive(Debug, Clone, Copy)]
struct Cost {
    distance_m: u32,
    time_min: u32,
}

impl Cost {
    const ZERO: Cost = Cost {
        distance_m: 0,
        time_min: 0,
    };

    const INFINITY: Cost = Cost {
        distance_m: u32::MAX,
        time_min: u32::MAX,
    };

    /// The ordering key under `metric`: the selected weight first, the
    /// other weight as a tie-break.
    ///
    /// Keying both the heap and the relaxation on this pair makes the
    /// objective lexicographic, so when two paths tie on the selected
    /// metric the one with the smaller other-metric total wins — in both
    /// query directions. Plain selected-metric ordering would leave the
    /// tie to settle order, which differs between A→B and B→A.
    fn key(&self, metric: Metric) -> (u32, u32) {
        match metric {
            Metric::Distance => (self.distance_m, self.time_min),
            Metric::Time => (self.time_min, self.distance_m),
        }
    }
}

/// A heap entry: a station keyed by its tentative `(selected, other)`
/// weight pair.
///
/// Ordered as a min-heap (`BinaryHeap` is a max-heap, so comparisons are
/// reversed), with the station name as a final tie-break for
/// deterministic pop order.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry<'a> {
    weight: (u32, u32),
    station: &'a str,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.station.cmp(self.station))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The raw output of one Dijkstra run.
struct SearchOutcome {
    path: Vec<String>,
    total_distance: u32,
    total_time: u32,
}

/// Single-source Dijkstra from `source`, stopping early once `destination`
/// is settled. Returns `None` when no path exists.
///
/// The heap and the relaxation are ordered by the lexicographic
/// `(selected, other)` weight pair, and every relaxation updates both
/// weights, so the non-selected total stays consistent with the same
/// path and selected-metric ties resolve to the same path in both query
/// directions. Stale heap entries are skipped via the visited set on pop
/// (lazy deletion) rather than removed eagerly.
fn dijkstra<'a>(
    graph: &'a StationGraph,
    source: &'a str,
    destination: &'a str,
    metric: Metric,
) -> Option<SearchOutcome> {
    let mut best: HashMap<&'a str, Cost> =
        graph.stations().map(|s| (s, Cost::INFINITY)).collect();
    let mut predecessor: HashMap<&'a str, &'a str> = HashMap::new();
    let mut visited: HashSet<&'a str> = HashSet::new();

    best.insert(source, Cost::ZERO);

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        weight: (0, 0),
        station: source,
    });

    while let Some(QueueEntry { weight, station }) = heap.pop() {
        if !visited.insert(station) {
            continue; // Stale entry for an already-settled station.
        }

        trace!(station, weight = ?weight, "settled");

        if station == destination {
            break; // No further improvement possible for a settled node.
        }

        let Some(&here) = best.get(station) else {
            continue;
        };

        for edge in graph.neighbors(station) {
            if visited.contains(edge.to.as_str()) {
                continue;
            }

            let candidate = Cost {
                distance_m: here.distance_m + edge.distance_m,
                time_min: here.time_min + edge.time_min,
            };

            let Some(current) = best.get_mut(edge.to.as_str()) else {
                continue;
            };

            if candidate.key(metric) < current.key(metric) {
                *current = candidate;
                predecessor.insert(&edge.to, station);
                heap.push(QueueEntry {
                    weight: candidate.key(metric),
                    station: &edge.to,
                });
            }
        }
    }

    // Walk predecessor links backward from the destination.
    let mut path: Vec<&str> = vec![destination];
    let mut cursor = destination;
    while let Some(&prev) = predecessor.get(cursor) {
        path.push(prev);
        cursor = prev;
    }
    path.reverse();

    if path.first() != Some(&source) {
        return None;
    }

    let total = best.get(destination).copied()?;

    Some(SearchOutcome {
        path: path.into_iter().map(str::to_owned).collect(),
        total_distance: total.distance_m,
        total_time: total.time_min,
    })
}
