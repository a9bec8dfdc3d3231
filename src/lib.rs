//! # meadowfield
//!
//! A parcel delivery simulation: a robot navigates a small, fixed,
//! undirected graph of village places, picking up parcels and carrying
//! them to their addresses. Decision strategies are compared by how many
//! moves they need to clear all parcels.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Place, Parcel, Route, VillageState)
//! - [`graph`] — Road graph built from `"A-B"` edge descriptions
//! - [`routing`] — Breadth-first shortest-path search
//! - [`strategy`] — The Robot trait and four decision strategies
//! - [`simulation`] — Turn-by-turn run loop
//! - [`benchmark`] — Averaged comparisons over random initial states
//! - [`village`] — The canonical Meadowfield roads and mail circuit
//!
//! ## Example
//!
//! ```
//! use meadowfield::benchmark::{compare_robots, BenchmarkConfig};
//! use meadowfield::strategy::{GoalOrientedRobot, NearestParcelRobot, RobotMemory};
//! use meadowfield::village;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let graph = village::road_graph()?;
//! let config = BenchmarkConfig::default().with_trials(100);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let comparison = compare_robots(
//!     &graph,
//!     &mut GoalOrientedRobot,
//!     &RobotMemory::NoRoute,
//!     &mut NearestParcelRobot,
//!     &RobotMemory::NoRoute,
//!     &config,
//!     &mut rng,
//! )?;
//! assert!(comparison.first_avg_turns > 0);
//! assert!(comparison.second_avg_turns > 0);
//! # Ok::<(), meadowfield::error::VillageError>(())
//! ```

pub mod benchmark;
pub mod error;
pub mod graph;
pub mod models;
pub mod routing;
pub mod simulation;
pub mod strategy;
pub mod village;
