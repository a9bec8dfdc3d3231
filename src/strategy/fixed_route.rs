//! Fixed-circuit strategy.

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Route, VillageState};
use crate::village;

use super::{follow_route, Decision, Robot, RobotMemory};

/// A robot that walks a fixed circuit, the way a mail carrier would.
///
/// Whenever its remembered route runs out it starts the circuit from the
/// top. If the circuit passes every place, every parcel is eventually
/// picked up and dropped off — at most two laps per parcel — regardless of
/// where the robot happens to stand when a lap begins, thanks to the
/// no-op rule for off-graph moves.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::strategy::{FixedRouteRobot, Robot, RobotMemory};
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![Parcel::new(Place::new("Shop"), Place::new("Farm"))],
/// );
///
/// let mut robot = FixedRouteRobot::mail_carrier();
/// let decision = robot.decide(&graph, &state, RobotMemory::NoRoute).unwrap();
/// assert_eq!(decision.direction, Place::new("Alice's House"));
/// ```
#[derive(Debug, Clone)]
pub struct FixedRouteRobot {
    circuit: Route,
}

impl FixedRouteRobot {
    /// Creates a robot that repeats the given circuit.
    pub fn new(circuit: Route) -> Self {
        Self { circuit }
    }

    /// The classic Meadowfield mail carrier, walking
    /// [`village::MAIL_ROUTE`].
    pub fn mail_carrier() -> Self {
        Self::new(village::mail_route())
    }
}

impl Robot for FixedRouteRobot {
    fn decide(
        &mut self,
        _graph: &RoadGraph,
        state: &VillageState,
        memory: RobotMemory,
    ) -> Result<Decision, VillageError> {
        let route = match memory {
            RobotMemory::NoRoute => self.circuit.clone(),
            RobotMemory::Remaining(route) => route,
        };
        Ok(follow_route(route, state.place()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Parcel, Place};

    fn state() -> VillageState {
        VillageState::new(
            Place::new("Post Office"),
            vec![Parcel::new(Place::new("Farm"), Place::new("Cabin"))],
        )
    }

    #[test]
    fn test_restarts_circuit_when_memory_empty() {
        let graph = village::road_graph().expect("valid roads");
        let mut robot = FixedRouteRobot::mail_carrier();
        let decision = robot
            .decide(&graph, &state(), RobotMemory::NoRoute)
            .expect("decides");
        assert_eq!(decision.direction, Place::new("Alice's House"));
        assert_eq!(decision.memory.into_route().len(), village::MAIL_ROUTE.len() - 1);
    }

    #[test]
    fn test_consumes_remembered_route() {
        let graph = village::road_graph().expect("valid roads");
        let mut robot = FixedRouteRobot::mail_carrier();
        let remembered = Route::from(vec![Place::new("Marketplace"), Place::new("Farm")]);
        let decision = robot
            .decide(&graph, &state(), RobotMemory::from_route(remembered))
            .expect("decides");
        assert_eq!(decision.direction, Place::new("Marketplace"));
        assert_eq!(
            decision.memory,
            RobotMemory::Remaining(Route::from(vec![Place::new("Farm")]))
        );
    }

    #[test]
    fn test_empty_circuit_stays_put() {
        let graph = village::road_graph().expect("valid roads");
        let mut robot = FixedRouteRobot::new(Route::new());
        let decision = robot
            .decide(&graph, &state(), RobotMemory::NoRoute)
            .expect("decides");
        assert_eq!(decision.direction, Place::new("Post Office"));
    }
}
