use std::collections::HashMap;

use tracing::debug;

use crate::{map::{MapProvider, MarkerPopup}, workout::{Workout, WorkoutId}};

/// One map marker per live workout, keyed by workout id.
///
/// The layer only holds marker handles; the map itself is passed in on every
/// call so the controller stays the single owner of the provider.
pub struct MarkerLayer<K> {
    markers: HashMap<WorkoutId, K>,
}

impl<K> Default for MarkerLayer<K> {
    fn default() -> Self {
        Self { markers: HashMap::new() }
    }
}

impl<K> MarkerLayer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a marker for `workout`. An existing marker for the same id is
    /// released first, so placing twice replaces.
    pub fn place<M>(&mut self, map: &mut M, workout: &Workout)
    where
        M: MapProvider<Marker = K>,
    {
        let marker = map.place(workout.location(), &MarkerPopup::from(workout));
        if let Some(old) = self.markers.insert(workout.id(), marker) {
            debug!(id = %workout.id(), "replaced existing marker");
            map.remove_marker(old);
        }
    }

    /// Returns whether a marker was released.
    pub fn remove_by_id<M>(&mut self, map: &mut M, id: WorkoutId) -> bool
    where
        M: MapProvider<Marker = K>,
    {
        match self.markers.remove(&id) {
            Some(marker) => {
                map.remove_marker(marker);
                true
            }
            None => false,
        }
    }

    pub fn remove_all<M>(&mut self, map: &mut M)
    where
        M: MapProvider<Marker = K>,
    {
        for (_, marker) in self.markers.drain() {
            map.remove_marker(marker);
        }
    }

    pub fn get(&self, id: WorkoutId) -> Option<&K> {
        self.markers.get(&id)
    }

    /// Ids with a marker, ascending.
    pub fn ids(&self) -> Vec<WorkoutId> {
        let mut ids: Vec<WorkoutId> = self.markers.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::{map::Coords, test_map::RecordingMap, workout::WorkoutKind};

    fn workout(id: u64, lat: f64) -> Workout {
        Workout::new(WorkoutId::new(id), Local::now(), WorkoutKind::Ride, Coords::new(lat, 0.), 10., 20.).unwrap()
    }

    #[test]
    fn removal_targets_the_right_marker_after_interleaving() {
        let mut map = RecordingMap::default();
        let mut layer = MarkerLayer::new();

        layer.place(&mut map, &workout(1, 1.));
        layer.place(&mut map, &workout(2, 2.));
        assert!(layer.remove_by_id(&mut map, WorkoutId::new(1)));
        layer.place(&mut map, &workout(3, 3.));
        assert!(layer.remove_by_id(&mut map, WorkoutId::new(3)));

        assert_eq!(layer.ids(), vec![WorkoutId::new(2)]);
        assert_eq!(map.live_locations(), vec![Coords::new(2., 0.)]);
    }

    #[test]
    fn placing_twice_replaces() {
        let mut map = RecordingMap::default();
        let mut layer = MarkerLayer::new();

        layer.place(&mut map, &workout(1, 1.));
        let first = *layer.get(WorkoutId::new(1)).unwrap();
        layer.place(&mut map, &workout(1, 1.));

        assert_eq!(layer.len(), 1);
        assert_eq!(map.live.len(), 1);
        assert_eq!(map.removed, vec![first]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut map = RecordingMap::default();
        let mut layer: MarkerLayer<u32> = MarkerLayer::new();
        assert!(!layer.remove_by_id(&mut map, WorkoutId::new(9)));
        assert!(map.removed.is_empty());
    }

    #[test]
    fn remove_all_releases_everything() {
        let mut map = RecordingMap::default();
        let mut layer = MarkerLayer::new();
        for id in 1..=4 {
            layer.place(&mut map, &workout(id, id as f64));
        }
        layer.remove_all(&mut map);

        assert!(layer.is_empty());
        assert!(map.live.is_empty());
        assert_eq!(map.removed.len(), 4);
    }

    #[test]
    fn popup_carries_label_and_kind_class() {
        let mut map = RecordingMap::default();
        let mut layer = MarkerLayer::new();
        let w = workout(1, 1.);
        layer.place(&mut map, &w);

        let (_, popup) = map.live.values().next().unwrap();
        assert_eq!(popup.content, w.label());
        assert_eq!(popup.class_name, "cycling-popup");
    }
}
