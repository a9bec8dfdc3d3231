//! Random-walk baseline strategy.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::VillageState;

use super::{Decision, Robot, RobotMemory};

/// A robot that wanders: each turn it moves to a uniformly random
/// neighbor, ignoring its memory entirely.
///
/// It will eventually run into every parcel and eventually bring each one
/// to its address, so it terminates almost surely — just very slowly. It
/// exists as the baseline the smarter strategies are measured against.
///
/// The random source is injected so runs are reproducible under a fixed
/// seed.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::strategy::{RandomRobot, Robot, RobotMemory};
/// use meadowfield::village;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![Parcel::new(Place::new("Shop"), Place::new("Farm"))],
/// );
///
/// let mut robot = RandomRobot::new(StdRng::seed_from_u64(7));
/// let decision = robot.decide(&graph, &state, RobotMemory::NoRoute).unwrap();
/// let neighbors = graph.neighbors(&Place::new("Post Office")).unwrap();
/// assert!(neighbors.contains(&decision.direction));
/// ```
#[derive(Debug)]
pub struct RandomRobot<R> {
    rng: R,
}

impl<R: Rng> RandomRobot<R> {
    /// Creates a random robot driven by the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Robot for RandomRobot<R> {
    fn decide(
        &mut self,
        graph: &RoadGraph,
        state: &VillageState,
        _memory: RobotMemory,
    ) -> Result<Decision, VillageError> {
        let neighbors = graph.neighbors(state.place())?;
        let direction = match neighbors.choose(&mut self.rng) {
            Some(place) => place.clone(),
            // A place with no roads cannot occur in a built graph; stay put.
            None => state.place().clone(),
        };
        Ok(Decision {
            direction,
            memory: RobotMemory::NoRoute,
        })
    }
}
