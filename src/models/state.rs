//! Village state and its transition function.

use serde::{Deserialize, Serialize};

use crate::graph::RoadGraph;

use super::{Parcel, Place};

/// An immutable snapshot of the simulation: where the robot stands and
/// which parcels are still outstanding.
///
/// States are never mutated in place; [`move_to`](VillageState::move_to)
/// produces a fresh state for every transition. Along any run the parcel
/// count is non-increasing, and a delivered parcel (one whose place equals
/// its address) never appears in `parcels`.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place, VillageState};
/// use meadowfield::village;
///
/// let graph = village::road_graph().unwrap();
/// let state = VillageState::new(
///     Place::new("Post Office"),
///     vec![Parcel::new(Place::new("Post Office"), Place::new("Alice's House"))],
/// );
///
/// // Post Office and Alice's House are directly connected, so one move
/// // both carries and delivers the parcel.
/// let next = state.move_to(&graph, &Place::new("Alice's House"));
/// assert_eq!(next.place(), &Place::new("Alice's House"));
/// assert!(next.all_delivered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageState {
    place: Place,
    parcels: Vec<Parcel>,
}

impl VillageState {
    /// Creates a state with the robot at `place` and the given parcels
    /// outstanding.
    pub fn new(place: Place, parcels: Vec<Parcel>) -> Self {
        Self { place, parcels }
    }

    /// The robot's current location.
    pub fn place(&self) -> &Place {
        &self.place
    }

    /// The outstanding parcels, in their original list order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns `true` once no parcels remain.
    pub fn all_delivered(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Moves the robot to `destination`, carrying and delivering parcels.
    ///
    /// If `destination` is not adjacent to the robot's current place this
    /// is a no-op returning a state equal to `self` — an off-graph move is
    /// ignored, not rejected, so strategies may propose directions blindly.
    /// Otherwise every parcel at the robot's location travels along to
    /// `destination`, and any parcel that thereby reaches its address is
    /// dropped as delivered.
    ///
    /// Pure: `self` is never modified.
    pub fn move_to(&self, graph: &RoadGraph, destination: &Place) -> VillageState {
        if !graph.adjacent(&self.place, destination) {
            return self.clone();
        }
        let parcels = self
            .parcels
            .iter()
            .map(|parcel| {
                if parcel.place() == &self.place {
                    parcel.carried_to(destination.clone())
                } else {
                    parcel.clone()
                }
            })
            .filter(|parcel| !parcel.is_delivered())
            .collect();
        VillageState::new(destination.clone(), parcels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::village;

    fn graph() -> RoadGraph {
        village::road_graph().expect("valid village roads")
    }

    fn state_with_parcel(at: &str, from: &str, to: &str) -> VillageState {
        VillageState::new(
            Place::new(at),
            vec![Parcel::new(Place::new(from), Place::new(to))],
        )
    }

    #[test]
    fn test_move_carries_and_delivers() {
        let state = state_with_parcel("Post Office", "Post Office", "Alice's House");
        let next = state.move_to(&graph(), &Place::new("Alice's House"));
        assert_eq!(next.place(), &Place::new("Alice's House"));
        assert!(next.all_delivered());
    }

    #[test]
    fn test_move_carries_without_delivering() {
        let state = state_with_parcel("Post Office", "Post Office", "Farm");
        let next = state.move_to(&graph(), &Place::new("Marketplace"));
        assert_eq!(next.place(), &Place::new("Marketplace"));
        assert_eq!(
            next.parcels(),
            &[Parcel::new(Place::new("Marketplace"), Place::new("Farm"))]
        );
    }

    #[test]
    fn test_move_to_non_neighbor_is_noop() {
        let state = state_with_parcel("Post Office", "Post Office", "Farm");
        let next = state.move_to(&graph(), &Place::new("Farm"));
        assert_eq!(next, state);
    }

    #[test]
    fn test_move_leaves_remote_parcels_alone() {
        let state = state_with_parcel("Post Office", "Shop", "Farm");
        let next = state.move_to(&graph(), &Place::new("Marketplace"));
        assert_eq!(next.place(), &Place::new("Marketplace"));
        assert_eq!(next.parcels(), state.parcels());
    }

    #[test]
    fn test_move_does_not_mutate_input() {
        let state = state_with_parcel("Post Office", "Post Office", "Cabin");
        let snapshot = state.clone();
        let _ = state.move_to(&graph(), &Place::new("Alice's House"));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_move_from_unknown_place_is_noop() {
        let state = state_with_parcel("Atlantis", "Shop", "Farm");
        let next = state.move_to(&graph(), &Place::new("Shop"));
        assert_eq!(next, state);
    }
}
