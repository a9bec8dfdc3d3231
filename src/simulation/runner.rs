//! The turn-by-turn simulation driver.

use tracing::trace;

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::VillageState;
use crate::strategy::{Decision, Robot, RobotMemory};

/// Runs a robot until every parcel is delivered, returning the turn count.
///
/// Each turn the robot decides on a direction, the state transitions
/// through [`VillageState::move_to`], and the decision's memory is carried
/// into the next turn. No maximum-turn bound is imposed: the goal-oriented
/// strategies provably finish, the random and fixed-route ones only almost
/// surely (respectively by circuit coverage), and guaranteeing termination
/// for a custom strategy is the caller's responsibility.
///
/// # Errors
///
/// Propagates fatal graph errors from the robot's `decide`.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::simulation::run_robot;
/// use meadowfield::strategy::{GoalOrientedRobot, RobotMemory};
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![Parcel::new(Place::new("Post Office"), Place::new("Alice's House"))],
/// );
///
/// let turns = run_robot(&graph, state, &mut GoalOrientedRobot, RobotMemory::NoRoute).unwrap();
/// assert_eq!(turns, 1);
/// ```
pub fn run_robot(
    graph: &RoadGraph,
    mut state: VillageState,
    robot: &mut dyn Robot,
    mut memory: RobotMemory,
) -> Result<usize, VillageError> {
    let mut turns = 0;
    while !state.all_delivered() {
        let Decision { direction, memory: next } = robot.decide(graph, &state, memory)?;
        trace!(turn = turns, %direction, parcels = state.parcels().len(), "moving");
        state = state.move_to(graph, &direction);
        memory = next;
        turns += 1;
    }
    Ok(turns)
}
