//! Turn-by-turn simulation of a robot clearing the village's parcels.

mod runner;

pub use runner::run_robot;
