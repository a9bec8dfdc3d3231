//! Nearest-pickup, deliver-in-order strategy.

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Route, VillageState};
use crate::routing::find_route;

use super::{follow_route, Decision, Robot, RobotMemory};

/// A robot that plans a full tour whenever it runs out of route.
///
/// The plan has two parts. First the pickup leg: among all parcels not yet
/// at the robot's location, the one with the strictly shortest pickup
/// route wins (earlier parcels win ties). Then a delivery leg per parcel,
/// in original list order, each one starting where the route built so far
/// ends.
///
/// This is a heuristic, not an optimizer: only the first pickup is chosen
/// by distance, and the delivery order is never reconsidered. It still
/// comfortably beats [`GoalOrientedRobot`](super::GoalOrientedRobot) on
/// average because it stops walking back and forth for one parcel at a
/// time.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::strategy::{NearestParcelRobot, Robot, RobotMemory};
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![
///         Parcel::new(Place::new("Shop"), Place::new("Alice's House")),
///         Parcel::new(Place::new("Marketplace"), Place::new("Farm")),
///     ],
/// );
///
/// // The Marketplace parcel is one hop away, the Shop parcel two.
/// let mut robot = NearestParcelRobot;
/// let decision = robot.decide(&graph, &state, RobotMemory::NoRoute).unwrap();
/// assert_eq!(decision.direction, Place::new("Marketplace"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestParcelRobot;

impl NearestParcelRobot {
    fn plan(&self, graph: &RoadGraph, state: &VillageState) -> Result<Route, VillageError> {
        let mut route: Option<Route> = None;
        for parcel in state.parcels() {
            if parcel.place() == state.place() {
                continue;
            }
            let pickup = find_route(graph, state.place(), parcel.place())?;
            let improves = route.as_ref().is_none_or(|best| pickup.len() < best.len());
            if improves {
                route = Some(pickup);
            }
        }
        let mut route = route.unwrap_or_default();

        for parcel in state.parcels() {
            let from = match route.last() {
                Some(place) => place.clone(),
                None => state.place().clone(),
            };
            route.extend(find_route(graph, &from, parcel.address())?);
        }
        Ok(route)
    }
}

impl Robot for NearestParcelRobot {
    fn decide(
        &mut self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: RobotMemory,
    ) -> Result<Decision, VillageError> {
        let route = match memory {
            RobotMemory::Remaining(route) => route,
            RobotMemory::NoRoute => self.plan(graph, state)?,
        };
        Ok(follow_route(route, state.place()))
    }
}
