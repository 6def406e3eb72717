//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types shared between the
//! graph and the planner: line identifiers, the optimization metric, the
//! route result shape, and the query error taxonomy.

mod error;
mod line;
mod metric;
mod route;

pub use error::RouteError;
pub use line::{Line, LineMap};
pub use metric::Metric;
pub use route::Route;
