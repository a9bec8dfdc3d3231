//! Error types for the simulation core.
//!
//! [`VillageError`] covers the fatal precondition violations a well-formed
//! village never triggers: referencing a place the graph does not know,
//! asking for a route between disconnected places, or feeding an
//! unparseable road description into the graph builder. Proposing an
//! off-graph move is deliberately *not* an error — see
//! [`VillageState::move_to`](crate::models::VillageState::move_to).

use crate::models::Place;

/// Errors that can occur while building or simulating a village.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VillageError {
    /// A place was referenced that the road graph has no entry for.
    ///
    /// Indicates malformed input (a route constant or parcel naming a
    /// location outside the graph); never retried.
    #[error("unknown place: {0}")]
    UnknownPlace(Place),

    /// No route exists between two places.
    ///
    /// A village graph is supposed to be connected, so this signals a
    /// data-integrity problem in the graph, not a transient condition.
    #[error("no route from {from} to {to}")]
    NoRouteFound {
        /// Start of the failed search.
        from: Place,
        /// Unreachable target.
        to: Place,
    },

    /// A road description could not be split into two place names.
    #[error("malformed road description: {0:?}")]
    MalformedRoad(String),
}
