use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GraphError;

/// Ett steg i et intervall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub power: f64,    // andel av FTP, 0 = free ride
    pub duration: f64, // sek
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub duration: f64, // sek
    pub steps: Vec<Step>,
}

/// Ferdig parset økt. Uforanderlig etter at den er levert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default)]
    pub name: Option<String>,
    pub intervals: Vec<Interval>,
}

impl Workout {
    /// Parse JSON med feltsti i feilmeldingen (f.eks. `intervals[2].steps`).
    pub fn from_json(json_in: &str) -> Result<Self, GraphError> {
        let de = &mut serde_json::Deserializer::from_str(json_in);
        let workout: Workout = serde_path_to_error::deserialize(de)?;
        workout.validate()?;
        Ok(workout)
    }

    /// Samme som `from_json`, men fra en allerede parset payload.
    pub fn from_value(value: &Value) -> Result<Self, GraphError> {
        let workout: Workout = serde_path_to_error::deserialize(value.clone())?;
        workout.validate()?;
        Ok(workout)
    }

    /// Avvis NaN/inf før noe tegnes – ingen delvis output.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (i, interval) in self.intervals.iter().enumerate() {
            if !interval.duration.is_finite() {
                return Err(GraphError::NonFinite {
                    interval: i,
                    step: None,
                    field: "duration",
                });
            }
            for (j, step) in interval.steps.iter().enumerate() {
                let field = if !step.power.is_finite() {
                    "power"
                } else if !step.duration.is_finite() {
                    "duration"
                } else {
                    continue;
                };
                return Err(GraphError::NonFinite {
                    interval: i,
                    step: Some(j),
                    field,
                });
            }
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.intervals.iter().map(|i| i.steps.len()).sum()
    }

    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(|i| i.duration).sum()
    }
}
