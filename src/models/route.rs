//! Route type.

use serde::{Deserialize, Serialize};

use super::Place;

/// An ordered sequence of places to walk through, shortest-path in hop
/// count, excluding the origin.
///
/// A route is consumed one hop at a time with [`advance`](Route::advance):
/// the head is the next direction to move in, the tail is what remains.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Place, Route};
///
/// let route = Route::from(vec![Place::new("Marketplace"), Place::new("Farm")]);
/// assert_eq!(route.len(), 2);
///
/// let (head, rest) = route.advance().unwrap();
/// assert_eq!(head, Place::new("Marketplace"));
/// assert_eq!(rest.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    places: Vec<Place>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hops remaining.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns `true` if no hops remain.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// The places in hop order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// The route's final destination, if any hops remain.
    pub fn last(&self) -> Option<&Place> {
        self.places.last()
    }

    /// Splits off the next hop, returning it with the remaining route.
    ///
    /// Returns `None` on an empty route.
    pub fn advance(mut self) -> Option<(Place, Route)> {
        if self.places.is_empty() {
            return None;
        }
        let head = self.places.remove(0);
        Some((head, self))
    }

    /// Appends a hop to the end of this route.
    pub fn push(&mut self, place: Place) {
        self.places.push(place);
    }

    /// Appends all hops of `other` to the end of this route.
    pub fn extend(&mut self, other: Route) {
        self.places.extend(other.places);
    }
}

impl From<Vec<Place>> for Route {
    fn from(places: Vec<Place>) -> Self {
        Self { places }
    }
}

impl FromIterator<Place> for Route {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        Self {
            places: iter.into_iter().collect(),
        }
    }
}
