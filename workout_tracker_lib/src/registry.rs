use tracing::debug;

use crate::{error::{Error, Field, Result}, workout::{check_positive, Workout, WorkoutId}};

/// Authoritative list of workouts, in insertion order.
#[derive(Debug, Default)]
pub struct Registry {
    workouts: Vec<Workout>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, workout: Workout) -> Result<()> {
        if self.contains(workout.id()) {
            return Err(Error::DuplicateId(workout.id()));
        }

        check_positive(Field::Distance, workout.distance_km())?;
        check_positive(Field::Duration, workout.duration_min())?;

        debug!(id = %workout.id(), "registry add");
        self.workouts.push(workout);
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: WorkoutId) -> Result<Workout> {
        let index = self.workouts.iter()
            .position(|w| w.id() == id)
            .ok_or(Error::NotFound(id))?;

        Ok(self.workouts.remove(index))
    }

    /// Removes every workout and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.workouts.len();
        self.workouts.clear();
        n
    }

    pub fn find_by_id(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: WorkoutId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn ids(&self) -> Vec<WorkoutId> {
        self.workouts.iter().map(Workout::id).collect()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use proptest::prelude::*;

    use super::*;
    use crate::{map::Coords, workout::WorkoutKind};

    fn workout(id: u64) -> Workout {
        Workout::new(WorkoutId::new(id), Local::now(), WorkoutKind::Run, Coords::new(1., 2.), 5., 30.).unwrap()
    }

    #[test]
    fn find_after_add_and_not_after_remove() {
        let mut registry = Registry::new();
        let w = workout(7);
        registry.add(w.clone()).unwrap();
        assert_eq!(registry.find_by_id(w.id()), Some(&w));

        assert_eq!(registry.remove_by_id(w.id()), Ok(w.clone()));
        assert_eq!(registry.find_by_id(w.id()), None);
        assert_eq!(registry.remove_by_id(w.id()), Err(Error::NotFound(w.id())));
    }

    #[test]
    fn keeps_insertion_order_across_removals() {
        let mut registry = Registry::new();
        for id in 1..=5 {
            registry.add(workout(id)).unwrap();
        }
        registry.remove_by_id(WorkoutId::new(2)).unwrap();
        registry.remove_by_id(WorkoutId::new(4)).unwrap();

        assert_eq!(registry.ids(), vec![WorkoutId::new(1), WorkoutId::new(3), WorkoutId::new(5)]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut registry = Registry::new();
        registry.add(workout(1)).unwrap();
        assert_eq!(registry.add(workout(1)), Err(Error::DuplicateId(WorkoutId::new(1))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut registry = Registry::new();
        registry.add(workout(1)).unwrap();
        registry.add(workout(2)).unwrap();
        assert_eq!(registry.clear(), 2);
        assert!(registry.is_empty());
        assert_eq!(registry.clear(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            (1u64..20).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn length_is_adds_minus_successful_removes(ops in proptest::collection::vec(op(), 0..60)) {
            let mut registry = Registry::new();
            let mut next = 1;
            let mut adds = 0;
            let mut removes = 0;

            for op in ops {
                match op {
                    Op::Add => {
                        registry.add(workout(next)).unwrap();
                        next += 1;
                        adds += 1;
                    }
                    Op::Remove(id) => {
                        if registry.remove_by_id(WorkoutId::new(id)).is_ok() {
                            removes += 1;
                        }
                    }
                }
            }

            prop_assert_eq!(registry.all().len(), adds - removes);
        }
    }
}
