//! Ordered adjacency over village places.

use std::collections::HashMap;

use crate::error::VillageError;
use crate::models::Place;

/// The village's road network: an ordered mapping from each place to its
/// neighbors.
///
/// Built once from `"A-B"` road descriptions and read-only afterwards.
/// Both directions of every road are recorded, so adjacency is symmetric
/// by construction. Ordering is deliberate and load-bearing: places appear
/// in order of first mention, and each neighbor list keeps append order
/// from the road list. Breadth-first routing breaks ties by this order, so
/// identical inputs always produce identical routes.
///
/// No self-loop or duplicate-road detection is performed; callers are
/// expected to supply a valid, connected, simple graph.
///
/// # Examples
///
/// ```
/// use meadowfield::graph::RoadGraph;
/// use meadowfield::models::Place;
///
/// let graph = RoadGraph::build(&["A-B", "B-C", "A-C"]).unwrap();
/// assert_eq!(graph.places().len(), 3);
/// assert!(graph.adjacent(&Place::new("A"), &Place::new("B")));
///
/// let neighbors = graph.neighbors(&Place::new("A")).unwrap();
/// assert_eq!(neighbors, &[Place::new("B"), Place::new("C")]);
/// ```
#[derive(Debug, Clone)]
pub struct RoadGraph {
    places: Vec<Place>,
    neighbors: Vec<Vec<Place>>,
    index: HashMap<Place, usize>,
}

impl RoadGraph {
    /// Builds a graph from road descriptions of the form `"A-B"`.
    ///
    /// Each description is split on its first `-` and both directions are
    /// appended to the respective neighbor lists.
    ///
    /// # Errors
    ///
    /// [`VillageError::MalformedRoad`] if a description has no separator.
    pub fn build(roads: &[&str]) -> Result<Self, VillageError> {
        let mut graph = Self {
            places: Vec::new(),
            neighbors: Vec::new(),
            index: HashMap::new(),
        };
        for road in roads {
            let (from, to) = road
                .split_once('-')
                .ok_or_else(|| VillageError::MalformedRoad((*road).to_string()))?;
            graph.add_road(Place::new(from), Place::new(to));
        }
        Ok(graph)
    }

    fn entry(&mut self, place: Place) -> usize {
        if let Some(&i) = self.index.get(&place) {
            return i;
        }
        let i = self.places.len();
        self.places.push(place.clone());
        self.neighbors.push(Vec::new());
        self.index.insert(place, i);
        i
    }

    fn add_road(&mut self, from: Place, to: Place) {
        let from_idx = self.entry(from.clone());
        let to_idx = self.entry(to.clone());
        self.neighbors[from_idx].push(to);
        self.neighbors[to_idx].push(from);
    }

    /// All places, in order of first mention in the road list.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Returns `true` if the graph has an entry for `place`.
    pub fn contains(&self, place: &Place) -> bool {
        self.index.contains_key(place)
    }

    /// The neighbors of `place`, in road-list append order.
    ///
    /// # Errors
    ///
    /// [`VillageError::UnknownPlace`] if `place` has no entry.
    pub fn neighbors(&self, place: &Place) -> Result<&[Place], VillageError> {
        self.index
            .get(place)
            .map(|&i| self.neighbors[i].as_slice())
            .ok_or_else(|| VillageError::UnknownPlace(place.clone()))
    }

    /// Returns `true` if a road connects `from` to `to`.
    ///
    /// Total: unknown places simply have no roads.
    pub fn adjacent(&self, from: &Place, to: &Place) -> bool {
        match self.index.get(from) {
            Some(&i) => self.neighbors[i].contains(to),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::village;

    #[test]
    fn test_build_village_graph() {
        let graph = village::road_graph().expect("valid roads");
        assert_eq!(graph.places().len(), 11);
        assert!(graph.contains(&Place::new("Post Office")));
        assert!(!graph.contains(&Place::new("Atlantis")));
    }

    #[test]
    fn test_places_keep_first_mention_order() {
        let graph = village::road_graph().expect("valid roads");
        assert_eq!(graph.places()[0], Place::new("Alice's House"));
        assert_eq!(graph.places()[1], Place::new("Bob's House"));
        assert_eq!(graph.places()[10], Place::new("Marketplace"));
    }

    #[test]
    fn test_neighbors_keep_append_order() {
        let graph = village::road_graph().expect("valid roads");
        let neighbors = graph.neighbors(&Place::new("Alice's House")).expect("known");
        assert_eq!(
            neighbors,
            &[
                Place::new("Bob's House"),
                Place::new("Cabin"),
                Place::new("Post Office"),
            ]
        );
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = village::road_graph().expect("valid roads");
        for place in graph.places() {
            for neighbor in graph.neighbors(place).expect("known") {
                assert!(graph.adjacent(neighbor, place));
            }
        }
    }

    #[test]
    fn test_unknown_place_errors() {
        let graph = village::road_graph().expect("valid roads");
        let missing = Place::new("Atlantis");
        assert_eq!(
            graph.neighbors(&missing),
            Err(VillageError::UnknownPlace(missing.clone()))
        );
        assert!(!graph.adjacent(&missing, &Place::new("Shop")));
    }

    #[test]
    fn test_malformed_road_errors() {
        let err = RoadGraph::build(&["A-B", "nonsense"]).expect_err("no separator");
        assert_eq!(err, VillageError::MalformedRoad("nonsense".to_string()));
    }
}
