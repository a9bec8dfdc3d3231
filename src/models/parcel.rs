//! Parcel type.

use serde::{Deserialize, Serialize};

use super::Place;

/// An item to be carried from its current location to its address.
///
/// `place` is wherever the parcel currently sits — a pickup point until the
/// robot collects it, then the robot's own location as it is carried. A
/// parcel whose `place` equals its `address` is delivered and is dropped
/// from the state; undelivered parcels always satisfy `place != address`.
///
/// # Examples
///
/// ```
/// use meadowfield::models::{Parcel, Place};
///
/// let parcel = Parcel::new(Place::new("Post Office"), Place::new("Cabin"));
/// assert_eq!(parcel.place(), &Place::new("Post Office"));
/// assert_eq!(parcel.address(), &Place::new("Cabin"));
/// assert!(!parcel.is_delivered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    place: Place,
    address: Place,
}

impl Parcel {
    /// Creates a parcel currently at `place`, addressed to `address`.
    pub fn new(place: Place, address: Place) -> Self {
        Self { place, address }
    }

    /// Where the parcel currently is.
    pub fn place(&self) -> &Place {
        &self.place
    }

    /// Where the parcel needs to go.
    pub fn address(&self) -> &Place {
        &self.address
    }

    /// Returns `true` if the parcel has reached its address.
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }

    /// Returns this parcel relocated to `place`, leaving the address alone.
    pub fn carried_to(&self, place: Place) -> Self {
        Self {
            place,
            address: self.address.clone(),
        }
    }
}
