use std::collections::BTreeMap;

use crate::map::{Coords, MapProvider, MarkerPopup};

/// Map provider that records what is currently drawn.
#[derive(Debug, Default)]
pub struct RecordingMap {
    next_handle: u32,
    pub live: BTreeMap<u32, (Coords, MarkerPopup)>,
    pub removed: Vec<u32>,
    pub views: Vec<(Coords, f64)>,
}

impl RecordingMap {
    pub fn live_locations(&self) -> Vec<Coords> {
        self.live.values().map(|(at, _)| *at).collect()
    }
}

impl MapProvider for RecordingMap {
    type Marker = u32;

    fn place(&mut self, location: Coords, popup: &MarkerPopup) -> u32 {
        self.next_handle += 1;
        self.live.insert(self.next_handle, (location, popup.clone()));
        self.next_handle
    }

    fn remove_marker(&mut self, marker: u32) {
        assert!(self.live.remove(&marker).is_some(), "marker {marker} removed twice");
        self.removed.push(marker);
    }

    fn set_view(&mut self, location: Coords, zoom: f64) {
        self.views.push((location, zoom));
    }
}
