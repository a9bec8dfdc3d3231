//! Single-goal routing strategy.

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Route, VillageState};
use crate::routing::find_route;

use super::{follow_route, Decision, Robot, RobotMemory};

/// A robot that works on one parcel at a time.
///
/// While a planned route remains it follows it. Otherwise it looks only at
/// the first outstanding parcel: if that parcel still has to be picked up
/// it routes to the parcel's location, else to the parcel's address. The
/// rest of the parcel list never influences the plan.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::strategy::{GoalOrientedRobot, Robot, RobotMemory};
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![Parcel::new(Place::new("Shop"), Place::new("Farm"))],
/// );
///
/// // The parcel sits at the Shop, two hops away via the Marketplace.
/// let mut robot = GoalOrientedRobot;
/// let decision = robot.decide(&graph, &state, RobotMemory::NoRoute).unwrap();
/// assert_eq!(decision.direction, Place::new("Marketplace"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoalOrientedRobot;

impl Robot for GoalOrientedRobot {
    fn decide(
        &mut self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: RobotMemory,
    ) -> Result<Decision, VillageError> {
        let route = match memory {
            RobotMemory::Remaining(route) => route,
            RobotMemory::NoRoute => match state.parcels().first() {
                Some(parcel) if parcel.place() != state.place() => {
                    find_route(graph, state.place(), parcel.place())?
                }
                Some(parcel) => find_route(graph, state.place(), parcel.address())?,
                None => Route::new(),
            },
        };
        Ok(follow_route(route, state.place()))
    }
}
