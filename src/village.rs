//! The canonical Meadowfield village.
//!
//! Meadowfield isn't very big: 11 places with 14 roads between them. This
//! module holds that fixed description plus the mail carrier's traditional
//! circuit past every place, used by
//! [`FixedRouteRobot`](crate::strategy::FixedRouteRobot) and throughout
//! the tests.

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Place, Route};

/// The 14 roads of Meadowfield.
pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// The mail carrier's circuit: starting from the post office it passes
/// every place in the village.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

/// Builds the Meadowfield road graph.
///
/// # Examples
///
/// ```
/// let graph = meadowfield::village::road_graph().unwrap();
/// assert_eq!(graph.places().len(), 11);
/// ```
pub fn road_graph() -> Result<RoadGraph, VillageError> {
    RoadGraph::build(&ROADS)
}

/// The mail circuit as a [`Route`].
pub fn mail_route() -> Route {
    MAIL_ROUTE.iter().map(|name| Place::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_route_follows_roads() {
        let graph = road_graph().expect("valid roads");
        let mut at = Place::new("Post Office");
        for stop in mail_route().places() {
            assert!(graph.adjacent(&at, stop), "{at} -> {stop} is not a road");
            at = stop.clone();
        }
        assert_eq!(at, Place::new("Post Office"));
    }

    #[test]
    fn test_mail_route_covers_every_place() {
        let graph = road_graph().expect("valid roads");
        for place in graph.places() {
            let on_route = place == &Place::new("Post Office")
                || mail_route().places().contains(place);
            assert!(on_route, "{place} not on the mail route");
        }
    }
}
