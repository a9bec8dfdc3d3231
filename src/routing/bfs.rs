//! Breadth-first shortest-path search.
//!
//! The graph is small, static, and unweighted, so plain breadth-first
//! search is exact: the first time the target shows up it is at minimal
//! hop distance. Ties between equal-length routes are broken by the
//! graph's stored neighbor order, which makes routing fully deterministic
//! for a given road list.

use std::collections::{HashSet, VecDeque};

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Place, Route};

/// Finds a shortest route from `from` to `to`, excluding the origin.
///
/// Maintains a FIFO worklist of (place, route-so-far) pairs. Each place is
/// enqueued at most once, at the depth where it is first reached; the
/// first neighbor equal to `to` ends the search. `from == to` yields the
/// empty route.
///
/// # Errors
///
/// - [`VillageError::UnknownPlace`] if `from` has no entry in the graph.
/// - [`VillageError::NoRouteFound`] if `to` is unreachable. On a connected
///   village graph this never happens; treat it as a fatal input error.
///
/// # Examples
///
/// ```
/// use meadowfield::models::Place;
/// use meadowfield::routing::find_route;
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let route = find_route(&graph, &Place::new("Post Office"), &Place::new("Farm")).unwrap();
/// assert_eq!(route.places(), &[Place::new("Marketplace"), Place::new("Farm")]);
/// ```
pub fn find_route(graph: &RoadGraph, from: &Place, to: &Place) -> Result<Route, VillageError> {
    if from == to {
        return Ok(Route::new());
    }

    let mut work = VecDeque::new();
    let mut enqueued = HashSet::new();
    work.push_back((from.clone(), Route::new()));
    enqueued.insert(from.clone());

    while let Some((at, route)) = work.pop_front() {
        for neighbor in graph.neighbors(&at)? {
            if neighbor == to {
                let mut found = route;
                found.push(neighbor.clone());
                return Ok(found);
            }
            if enqueued.insert(neighbor.clone()) {
                let mut extended = route.clone();
                extended.push(neighbor.clone());
                work.push_back((neighbor.clone(), extended));
            }
        }
    }

    Err(VillageError::NoRouteFound {
        from: from.clone(),
        to: to.clone(),
    })
}
