//! Two-leg trip composition.
//!
//! Callers who want a route through an explicit intermediate stop run two
//! independent queries and merge the results. That composition lives here,
//! in the calling layer: the planner itself only ever solves one
//! source/destination pair per call.

use crate::domain::{Metric, Route, RouteError};
use crate::planner::RouteFinder;

/// Plan a route from `source` to `destination` via an intermediate stop.
///
/// Runs `source → via` and `via → destination` and merges the legs:
/// distances, times, fares and transfers are summed, and the via station
/// appears once in the combined path (it ends the first leg and starts the
/// second, so the total stations visited is one less than the two legs
/// added together). Either leg's failure propagates unchanged.
///
/// The combined fare is the sum of two per-leg fares, which may differ
/// from the fare of a single through-query over the same stations; that is
/// the policy for explicit-via trips.
pub fn plan_via(
    finder: &RouteFinder,
    source: &str,
    via: &str,
    destination: &str,
    metric: Metric,
) -> Result<Route, RouteError> {
    let first = finder.find_shortest_path(source, via, metric)?;
    let second = finder.find_shortest_path(via, destination, metric)?;

    let mut path = first.path;
    path.extend(second.path.into_iter().skip(1));

    Ok(Route {
        no_of_stations: (path.len() - 1) as u32,
        path,
        total_distance: first.total_distance + second.total_distance,
        total_time: first.total_time + second.total_time,
        transfers: first.transfers + second.transfers,
        fare: first.fare + second.fare,
        optimized_by: metric,
    })
}
