//! The contract between the core and whatever draws the map.

use crate::workout::Workout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coords {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Popup attached to a workout's marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
}

impl From<&Workout> for MarkerPopup {
    fn from(workout: &Workout) -> Self {
        Self {
            content: workout.label().to_owned(),
            class_name: format!("{}-popup", workout.kind().type_name()),
        }
    }
}

/// Map provider collaborator.
///
/// Implementations own the actual map widget. Markers are opaque handles that
/// the provider hands out in `place` and takes back in `remove_marker`.
pub trait MapProvider {
    type Marker;

    fn place(&mut self, location: Coords, popup: &MarkerPopup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn set_view(&mut self, location: Coords, zoom: f64);
}
