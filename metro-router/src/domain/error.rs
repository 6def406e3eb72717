//! Route query error taxonomy.
//!
//! Every failure a query can produce is returned as data through the
//! result channel, never panicked, so UI layers can render the message
//! directly.

/// Why a route query could not produce a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The named station is not in the network.
    #[error("invalid station: {0}")]
    InvalidStation(String),

    /// Source and destination are the same station.
    #[error("source and destination are the same station")]
    SameStation,

    /// The two stations are in disconnected components.
    #[error("no route exists between {from} and {to}")]
    NoRoute { from: String, to: String },
}
