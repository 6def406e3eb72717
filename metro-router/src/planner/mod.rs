//! Route planning using Dijkstra's shortest-path search.
//!
//! This module implements the core query: "what is the best route from
//! this station to that one?" — minimizing either distance or travel time,
//! and deriving line transfers and the fare for the winning path.

mod fare;
mod search;


pub use fare::{FareSchedule, count_transfers};
pub use search::RouteFinder;
