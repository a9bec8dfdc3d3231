//! Strategy benchmarking over random initial states.
//!
//! Strategies are compared by the average number of turns they need to
//! clear all parcels. Randomness — both the generated states and any
//! random choices inside a strategy — comes from injected [`Rng`] values,
//! so a fixed seed reproduces a benchmark exactly.

mod config;

pub use config::BenchmarkConfig;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::error::VillageError;
use crate::graph::RoadGraph;
use crate::models::{Parcel, Place, VillageState};
use crate::simulation::run_robot;
use crate::strategy::{Robot, RobotMemory};

/// Generates a random initial state on the given graph.
///
/// The robot starts at a uniformly random place. Each parcel gets a
/// uniformly random address and a location resampled until it differs
/// from the address — a self-addressed parcel would count as already
/// delivered and may not appear in a state.
///
/// # Panics
///
/// Panics if the graph has no places.
///
/// # Examples
///
/// ```
/// use meadowfield::benchmark::random_state;
/// use meadowfield::village;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = village::road_graph().unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let state = random_state(&graph, 5, &mut rng);
/// assert_eq!(state.parcels().len(), 5);
/// ```
pub fn random_state<R: Rng>(graph: &RoadGraph, parcel_count: usize, rng: &mut R) -> VillageState {
    let places = graph.places();
    let start = pick_place(places, rng);
    let mut parcels = Vec::with_capacity(parcel_count);
    for _ in 0..parcel_count {
        let address = pick_place(places, rng);
        let place = loop {
            let place = pick_place(places, rng);
            if place != address {
                break place;
            }
        };
        parcels.push(Parcel::new(place, address));
    }
    VillageState::new(start, parcels)
}

fn pick_place<R: Rng>(places: &[Place], rng: &mut R) -> Place {
    places
        .choose(rng)
        .expect("graph has at least one place")
        .clone()
}

/// Average turns a robot needs over `config.trials()` random states,
/// rounded to the nearest integer.
///
/// Each trial starts from a fresh random state and a clone of
/// `initial_memory`. Zero trials yield zero.
///
/// # Errors
///
/// Propagates fatal graph errors from the robot.
///
/// # Examples
///
/// ```
/// use meadowfield::benchmark::{average_turns, BenchmarkConfig};
/// use meadowfield::strategy::{GoalOrientedRobot, RobotMemory};
/// use meadowfield::village;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = village::road_graph().unwrap();
/// let config = BenchmarkConfig::default().with_trials(50);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let avg = average_turns(
///     &graph,
///     &mut GoalOrientedRobot,
///     &RobotMemory::NoRoute,
///     &config,
///     &mut rng,
/// )
/// .unwrap();
/// assert!(avg > 0);
/// ```
pub fn average_turns<R: Rng>(
    graph: &RoadGraph,
    robot: &mut dyn Robot,
    initial_memory: &RobotMemory,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<u64, VillageError> {
    let states: Vec<VillageState> = (0..config.trials())
        .map(|_| random_state(graph, config.parcel_count(), rng))
        .collect();
    let avg = average_over(graph, &states, robot, initial_memory)?;
    debug!(trials = config.trials(), avg, "benchmark finished");
    Ok(avg)
}

/// The outcome of a head-to-head comparison of two robots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotComparison {
    /// Rounded mean turns of the first robot.
    pub first_avg_turns: u64,
    /// Rounded mean turns of the second robot.
    pub second_avg_turns: u64,
}

/// Runs two robots over the *same* sequence of random initial states.
///
/// Generating the trial states once and evaluating both robots on
/// identical inputs gives a fair head-to-head comparison; sampling states
/// independently per robot would let generation luck skew the result.
///
/// # Errors
///
/// Propagates fatal graph errors from either robot.
///
/// # Examples
///
/// ```
/// use meadowfield::benchmark::{compare_robots, BenchmarkConfig};
/// use meadowfield::strategy::{FixedRouteRobot, GoalOrientedRobot, RobotMemory};
/// use meadowfield::village;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let graph = village::road_graph().unwrap();
/// let config = BenchmarkConfig::default().with_trials(50);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let comparison = compare_robots(
///     &graph,
///     &mut FixedRouteRobot::mail_carrier(),
///     &RobotMemory::NoRoute,
///     &mut GoalOrientedRobot,
///     &RobotMemory::NoRoute,
///     &config,
///     &mut rng,
/// )
/// .unwrap();
/// assert!(comparison.first_avg_turns > 0);
/// assert!(comparison.second_avg_turns > 0);
/// ```
pub fn compare_robots<R: Rng>(
    graph: &RoadGraph,
    first: &mut dyn Robot,
    first_memory: &RobotMemory,
    second: &mut dyn Robot,
    second_memory: &RobotMemory,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<RobotComparison, VillageError> {
    let states: Vec<VillageState> = (0..config.trials())
        .map(|_| random_state(graph, config.parcel_count(), rng))
        .collect();

    let first_avg_turns = average_over(graph, &states, first, first_memory)?;
    let second_avg_turns = average_over(graph, &states, second, second_memory)?;
    debug!(
        trials = config.trials(),
        first_avg_turns, second_avg_turns, "comparison finished"
    );

    Ok(RobotComparison {
        first_avg_turns,
        second_avg_turns,
    })
}

fn average_over(
    graph: &RoadGraph,
    states: &[VillageState],
    robot: &mut dyn Robot,
    initial_memory: &RobotMemory,
) -> Result<u64, VillageError> {
    if states.is_empty() {
        return Ok(0);
    }
    let mut total = 0usize;
    for state in states {
        total += run_robot(graph, state.clone(), robot, initial_memory.clone())?;
    }
    Ok((total as f64 / states.len() as f64).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{GoalOrientedRobot, NearestParcelRobot};
    use crate::village;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph() -> RoadGraph {
        village::road_graph().expect("valid roads")
    }

    #[test]
    fn test_random_state_respects_invariants() {
        let graph = graph();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let state = random_state(&graph, 5, &mut rng);
            assert!(graph.contains(state.place()));
            assert_eq!(state.parcels().len(), 5);
            for parcel in state.parcels() {
                assert_ne!(parcel.place(), parcel.address());
                assert!(graph.contains(parcel.place()));
                assert!(graph.contains(parcel.address()));
            }
        }
    }

    #[test]
    fn test_random_state_is_seed_deterministic() {
        let graph = graph();
        let a = random_state(&graph, 5, &mut StdRng::seed_from_u64(21));
        let b = random_state(&graph, 5, &mut StdRng::seed_from_u64(21));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_trials_average_is_zero() {
        let graph = graph();
        let config = BenchmarkConfig::default().with_trials(0);
        let avg = average_turns(
            &graph,
            &mut GoalOrientedRobot,
            &RobotMemory::NoRoute,
            &config,
            &mut StdRng::seed_from_u64(1),
        )
        .expect("runs");
        assert_eq!(avg, 0);
    }

    #[test]
    fn test_average_turns_is_seed_deterministic() {
        let graph = graph();
        let config = BenchmarkConfig::default().with_trials(30);
        let run = |seed| {
            average_turns(
                &graph,
                &mut GoalOrientedRobot,
                &RobotMemory::NoRoute,
                &config,
                &mut StdRng::seed_from_u64(seed),
            )
            .expect("runs")
        };
        assert_eq!(run(5), run(5));
        assert!(run(5) > 0);
    }

    #[test]
    fn test_compare_robots_is_seed_deterministic() {
        let graph = graph();
        let config = BenchmarkConfig::default().with_trials(30);
        let run = |seed| {
            compare_robots(
                &graph,
                &mut GoalOrientedRobot,
                &RobotMemory::NoRoute,
                &mut NearestParcelRobot,
                &RobotMemory::NoRoute,
                &config,
                &mut StdRng::seed_from_u64(seed),
            )
            .expect("runs")
        };
        assert_eq!(run(8), run(8));
    }
}
