use crate::workout::{Workout, WorkoutId, WorkoutKind};

/// What the sidebar shows for one workout. The id ties a clicked entry back
/// to its record.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub label: String,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl From<&Workout> for ListEntry {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id(),
            kind: workout.kind(),
            label: workout.label().to_owned(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
        }
    }
}

/// Rendered workout summaries, newest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListView {
    entries: Vec<ListEntry>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content with `records` (given in insertion order).
    pub fn render_all(&mut self, records: &[Workout]) {
        self.entries = records.iter().rev().map(ListEntry::from).collect();
    }

    /// Puts a freshly created workout on top.
    pub fn insert(&mut self, workout: &Workout) {
        self.entries.insert(0, ListEntry::from(workout));
    }

    pub fn remove_entry_by_id(&mut self, id: WorkoutId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<WorkoutId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::map::Coords;

    fn workouts(n: u64) -> Vec<Workout> {
        (1..=n)
            .map(|id| Workout::new(WorkoutId::new(id), Local::now(), WorkoutKind::Run, Coords::new(0., 0.), id as f64, 10.).unwrap())
            .collect()
    }

    #[test]
    fn render_all_is_newest_first() {
        let mut view = ListView::new();
        view.render_all(&workouts(3));
        assert_eq!(view.ids(), vec![WorkoutId::new(3), WorkoutId::new(2), WorkoutId::new(1)]);

        view.render_all(&workouts(1));
        assert_eq!(view.ids(), vec![WorkoutId::new(1)]);
    }

    #[test]
    fn insert_matches_full_render() {
        let records = workouts(4);
        let mut incremental = ListView::new();
        for w in &records {
            incremental.insert(w);
        }
        let mut full = ListView::new();
        full.render_all(&records);

        assert_eq!(incremental, full);
    }

    #[test]
    fn remove_entry_only_touches_that_id() {
        let mut view = ListView::new();
        view.render_all(&workouts(3));

        assert!(view.remove_entry_by_id(WorkoutId::new(2)));
        assert!(!view.remove_entry_by_id(WorkoutId::new(2)));
        assert_eq!(view.ids(), vec![WorkoutId::new(3), WorkoutId::new(1)]);

        view.clear();
        assert!(view.is_empty());
    }

    #[test]
    fn entry_copies_summary_fields() {
        let records = workouts(2);
        let entry = ListEntry::from(&records[1]);
        assert_eq!(entry.label, records[1].label());
        assert_eq!(entry.distance_km, 2.);
        assert_eq!(entry.duration_min, 10.);
    }
}
