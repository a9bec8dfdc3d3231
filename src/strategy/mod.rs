//! Robot decision strategies.
//!
//! A robot is a decision function called once per turn: given the road
//! graph, the current state, and whatever it remembered from last turn, it
//! names the next place to move to. The four variants span the interesting
//! range from baseline to heuristic:
//!
//! - [`RandomRobot`] — uniform random neighbor, no memory
//! - [`FixedRouteRobot`] — walks a fixed circuit over and over
//! - [`GoalOrientedRobot`] — routes to one parcel at a time
//! - [`NearestParcelRobot`] — nearest pickup first, then delivers in order

mod fixed_route;
mod goal_oriented;
mod nearest_parcel;
mod random;

pub use fixed_route::FixedRouteRobot;
pub use goal_oriented::GoalOrientedRobot;
pub use nearest_parcel::NearestParcelRobot;
pub use random::RandomRobot;

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Place, Route, VillageState};

/// What a robot carries between turns.
///
/// The simulator treats this as opaque: it hands back whatever the last
/// decision produced. For the strategies here it is always the remaining
/// planned route, made explicit as a tagged variant instead of "empty
/// means no plan". A `Remaining` value never holds an empty route;
/// [`RobotMemory::from_route`] normalizes that case to `NoRoute`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RobotMemory {
    /// No plan; the strategy decides from scratch next turn.
    #[default]
    NoRoute,
    /// The rest of a planned route, always non-empty.
    Remaining(Route),
}

impl RobotMemory {
    /// Wraps a route, normalizing the empty route to [`RobotMemory::NoRoute`].
    pub fn from_route(route: Route) -> Self {
        if route.is_empty() {
            Self::NoRoute
        } else {
            Self::Remaining(route)
        }
    }

    /// Unwraps into a route; [`RobotMemory::NoRoute`] becomes the empty route.
    pub fn into_route(self) -> Route {
        match self {
            Self::NoRoute => Route::new(),
            Self::Remaining(route) => route,
        }
    }
}

/// A robot's answer for one turn: where to move and what to remember.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// The place to move to next.
    pub direction: Place,
    /// Memory to hand back on the next turn.
    pub memory: RobotMemory,
}

/// A decision strategy for the delivery robot.
///
/// `decide` is called once per turn and has no effect other than its
/// return value. `&mut self` exists only for strategies that own a random
/// source; planning state between turns belongs in [`RobotMemory`].
pub trait Robot {
    /// Picks the next direction given the current state and carried memory.
    ///
    /// # Errors
    ///
    /// Fatal graph errors only ([`VillageError::UnknownPlace`],
    /// [`VillageError::NoRouteFound`]); these indicate malformed input,
    /// never a recoverable condition.
    fn decide(
        &mut self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: RobotMemory,
    ) -> Result<Decision, VillageError>;
}

/// Turns a planned route into this turn's decision.
///
/// An empty plan proposes the robot's own place, which the move rule
/// treats as a no-op; this keeps `decide` total without a panic path.
fn follow_route(route: Route, here: &Place) -> Decision {
    match route.advance() {
        Some((direction, rest)) => Decision {
            direction,
            memory: RobotMemory::from_route(rest),
        },
        None => Decision {
            direction: here.clone(),
            memory: RobotMemory::NoRoute,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;

    #[test]
    fn test_memory_normalizes_empty_route() {
        assert_eq!(RobotMemory::from_route(Route::new()), RobotMemory::NoRoute);
        let route = Route::from(vec![Place::new("Shop")]);
        assert_eq!(
            RobotMemory::from_route(route.clone()),
            RobotMemory::Remaining(route)
        );
    }

    #[test]
    fn test_memory_round_trips_into_route() {
        assert!(RobotMemory::NoRoute.into_route().is_empty());
        let route = Route::from(vec![Place::new("Farm"), Place::new("Shop")]);
        assert_eq!(
            RobotMemory::from_route(route.clone()).into_route(),
            route
        );
    }

    #[test]
    fn test_follow_route_consumes_head() {
        let route = Route::from(vec![Place::new("Marketplace"), Place::new("Farm")]);
        let decision = follow_route(route, &Place::new("Post Office"));
        assert_eq!(decision.direction, Place::new("Marketplace"));
        assert_eq!(
            decision.memory,
            RobotMemory::Remaining(Route::from(vec![Place::new("Farm")]))
        );
    }

    #[test]
    fn test_follow_empty_route_stays_put() {
        let decision = follow_route(Route::new(), &Place::new("Post Office"));
        assert_eq!(decision.direction, Place::new("Post Office"));
        assert_eq!(decision.memory, RobotMemory::NoRoute);
    }
}
