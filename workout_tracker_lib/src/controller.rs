//! Mediates user actions against the registry, the marker layer and the list.
//!
//! Every mutating operation touches all three together and runs to
//! completion before the next event is handled, so after any call the three
//! hold the same set of workouts.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::{
    config::MapConfig,
    error::{Error, Result},
    list_view::ListView,
    map::{Coords, MapProvider},
    marker_layer::MarkerLayer,
    registry::Registry,
    workout::{Workout, WorkoutForm, WorkoutId},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    /// A point was picked on the map and the form is open.
    AwaitingFormInput { location: Coords },
}

pub struct Controller<M: MapProvider> {
    config: MapConfig,
    map: Option<M>,
    registry: Registry,
    markers: MarkerLayer<M::Marker>,
    list: ListView,
    state: FormState,
    next_id: u64,
    clock: fn() -> DateTime<Local>,
    position_error: Option<Error>,
}

impl<M: MapProvider> Controller<M> {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            map: None,
            registry: Registry::new(),
            markers: MarkerLayer::new(),
            list: ListView::new(),
            state: FormState::Idle,
            next_id: 1,
            clock: Local::now,
            position_error: None,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Hands over the map once the user's position is known and centers it
    /// there. A previously attached map gives up its markers to the new one.
    pub fn attach_map(&mut self, mut map: M, position: Coords) {
        if let Some(mut old) = self.map.take() {
            self.markers.remove_all(&mut old);
        }

        map.set_view(position, self.config.zoom_level);
        for workout in self.registry.all() {
            self.markers.place(&mut map, workout);
        }

        info!(lat = position.lat, lng = position.lng, "map attached");
        self.map = Some(map);
        self.position_error = None;
    }

    /// Records that no position could be obtained. The map stays detached.
    pub fn geolocation_failed(&mut self, reason: impl Into<String>) -> Error {
        let error = Error::GeolocationUnavailable(reason.into());
        warn!("{error}");
        self.position_error = Some(error.clone());
        error
    }

    pub fn position_error(&self) -> Option<&Error> {
        self.position_error.as_ref()
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn pending_location(&self) -> Option<Coords> {
        match self.state {
            FormState::Idle => None,
            FormState::AwaitingFormInput { location } => Some(location),
        }
    }

    /// User clicked the map. Picking again while the form is open moves the
    /// pending point.
    pub fn select_point(&mut self, location: Coords) -> Result<()> {
        if self.map.is_none() {
            return Err(Error::MapUnavailable);
        }

        debug!(lat = location.lat, lng = location.lng, "point selected");
        self.state = FormState::AwaitingFormInput { location };
        Ok(())
    }

    pub fn cancel(&mut self) {
        if self.state != FormState::Idle {
            debug!("creation cancelled");
        }
        self.state = FormState::Idle;
    }

    /// Creates a workout at the pending point. On a validation error the
    /// form stays open with the same point.
    pub fn submit(&mut self, form: &WorkoutForm) -> Result<WorkoutId> {
        let FormState::AwaitingFormInput { location } = self.state else {
            return Err(Error::NoPendingLocation);
        };

        let (distance_km, duration_min) = form.parse().inspect_err(|err| warn!("{err}"))?;
        let Some(map) = self.map.as_mut() else {
            return Err(Error::MapUnavailable);
        };

        let id = WorkoutId::new(self.next_id);
        let workout = Workout::new(id, (self.clock)(), form.kind, location, distance_km, duration_min)?;
        self.registry.add(workout.clone())?;
        self.next_id += 1;

        self.markers.place(map, &workout);
        self.list.insert(&workout);
        self.state = FormState::Idle;

        info!(%id, kind = workout.kind().type_name(), "created {}", workout.label());
        Ok(id)
    }

    /// Centers the map on a workout. Without a map there is nothing to
    /// center, whatever the id.
    pub fn navigate_to(&mut self, id: WorkoutId) -> Result<()> {
        let map = self.map.as_mut().ok_or(Error::MapUnavailable)?;
        let workout = self.registry.find_by_id(id).ok_or(Error::NotFound(id))?;

        map.set_view(workout.location(), self.config.zoom_level);
        Ok(())
    }

    /// Removes a workout from all three views. A stale id is a no-op.
    pub fn delete(&mut self, id: WorkoutId) -> Option<Workout> {
        let workout = match self.registry.remove_by_id(id) {
            Ok(workout) => workout,
            Err(err) => {
                debug!("delete ignored: {err}");
                return None;
            }
        };

        if let Some(map) = self.map.as_mut() {
            self.markers.remove_by_id(map, id);
        }
        self.list.remove_entry_by_id(id);

        info!(%id, "deleted {}", workout.label());
        Some(workout)
    }

    /// Returns how many workouts were removed.
    pub fn delete_all(&mut self) -> usize {
        let n = self.registry.clear();
        if let Some(map) = self.map.as_mut() {
            self.markers.remove_all(map);
        }
        self.list.clear();

        info!("deleted all {n} workouts");
        n
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn markers(&self) -> &MarkerLayer<M::Marker> {
        &self.markers
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Registry, markers and list agree on the live ids, and the list is in
    /// reverse insertion order.
    pub fn is_synchronized(&self) -> bool {
        let mut registry_ids = self.registry.ids();
        let mut list_ids = self.list.ids();
        list_ids.reverse();
        if list_ids != registry_ids {
            return false;
        }

        if self.map.is_none() {
            return self.markers.is_empty();
        }
        registry_ids.sort();
        self.markers.ids() == registry_ids
    }
}
