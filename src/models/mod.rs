//! Domain model types for the village simulation.
//!
//! Provides the core value types: places as opaque location identifiers,
//! parcels with a carrying location and a delivery address, routes as
//! ordered hop sequences, and the immutable village state with its pure
//! transition function.

mod parcel;
mod place;
mod route;
mod state;

pub use parcel::Parcel;
pub use place::Place;
pub use route::Route;
pub use state::VillageState;
