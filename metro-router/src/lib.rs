//! Metro route-optimization core.
//!
//! A weighted undirected graph of metro stations plus a Dijkstra
//! shortest-path engine that answers: "what is the best route between
//! these two stations?" — optimizing for either distance or travel time,
//! and reporting line transfers and the fare for the trip.

pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod trip;
