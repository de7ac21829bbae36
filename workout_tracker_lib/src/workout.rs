use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};

use crate::{error::{Error, Field, Result}, map::Coords};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Run,
    Ride,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 2] = [WorkoutKind::Run, WorkoutKind::Ride];

    /// Name used in labels, e.g. "Running on April 14".
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Run => "Running",
            WorkoutKind::Ride => "Cycling",
        }
    }

    /// Type name used for form values and css classes.
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkoutKind::Run => "running",
            WorkoutKind::Ride => "cycling",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" | "run" => Ok(WorkoutKind::Run),
            "cycling" | "ride" => Ok(WorkoutKind::Ride),
            other => Err(format!("unknown workout type: {other:?}")),
        }
    }
}

/// A logged workout. Every field is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    kind: WorkoutKind,
    location: Coords,
    distance_km: f64,
    duration_min: f64,
    label: String,
}

impl Workout {
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Local>,
        kind: WorkoutKind,
        location: Coords,
        distance_km: f64,
        duration_min: f64,
    ) -> Result<Self> {
        let distance_km = check_positive(Field::Distance, distance_km)?;
        let duration_min = check_positive(Field::Duration, duration_min)?;

        Ok(Self {
            id,
            created_at,
            kind,
            location,
            distance_km,
            duration_min,
            label: describe(kind, &created_at),
        })
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    pub fn location(&self) -> Coords {
        self.location
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub fn describe(kind: WorkoutKind, created_at: &DateTime<Local>) -> String {
    format!("{} on {}", kind.display_name(), created_at.format("%B %-d"))
}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind, distance: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            kind,
            distance: distance.into(),
            duration: duration.into(),
        }
    }

    /// Returns `(distance_km, duration_min)`. Distance is checked first.
    pub fn parse(&self) -> Result<(f64, f64)> {
        let distance = parse_positive(Field::Distance, &self.distance)?;
        let duration = parse_positive(Field::Duration, &self.duration)?;
        Ok((distance, duration))
    }
}

pub fn parse_positive(field: Field, input: &str) -> Result<f64> {
    let invalid = || Error::Validation { field, input: input.to_owned() };

    let value = input.trim().parse::<f64>().map_err(|_| invalid())?;
    check_positive(field, value).map_err(|_| invalid())
}

pub(crate) fn check_positive(field: Field, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(Error::Validation { field, input: value.to_string() })
    }
}
