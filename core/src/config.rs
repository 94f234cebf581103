use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::scaling::DEFAULT_BAR_SCALE;

/// Kanalnavn slik publiseringsbussen navngir dem: `db:<navn>`.
pub fn channel_name(name: &str) -> String {
    format!("db:{name}")
}

fn default_power_prop() -> String {
    "power".into()
}

fn default_metric() -> String {
    "ftp".into()
}

fn default_scale() -> f64 {
    DEFAULT_BAR_SCALE
}

fn default_workout_prop() -> String {
    "workout".into()
}

fn default_index() -> String {
    "intervalIndex".into()
}

/// Oppsett for live-grafen (tilsvarer attributtene `prop`, `metric`, `scale`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGraphConfig {
    #[serde(default = "default_power_prop")]
    pub prop: String,
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub reclassify_on_metric: bool,
}

impl Default for DataGraphConfig {
    fn default() -> Self {
        Self {
            prop: default_power_prop(),
            metric: default_metric(),
            scale: default_scale(),
            reclassify_on_metric: false,
        }
    }
}

impl DataGraphConfig {
    pub fn from_json(json_in: &str) -> Result<Self, GraphError> {
        let cfg: DataGraphConfig =
            serde_json::from_str(json_in).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if self.prop.is_empty() || self.metric.is_empty() {
            return Err(GraphError::InvalidConfig("prop and metric must be named".into()));
        }
        if self.prop == self.metric {
            return Err(GraphError::InvalidConfig("prop and metric must differ".into()));
        }
        Ok(())
    }
}

/// Oppsett for øktgrafen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutGraphConfig {
    #[serde(default = "default_workout_prop")]
    pub prop: String,
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_index")]
    pub index: String,
}

impl Default for WorkoutGraphConfig {
    fn default() -> Self {
        Self {
            prop: default_workout_prop(),
            metric: default_metric(),
            index: default_index(),
        }
    }
}

impl WorkoutGraphConfig {
    pub fn from_json(json_in: &str) -> Result<Self, GraphError> {
        let cfg: WorkoutGraphConfig =
            serde_json::from_str(json_in).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        let names = [&self.prop, &self.metric, &self.index];
        if names.iter().any(|n| n.is_empty()) {
            return Err(GraphError::InvalidConfig("channel names must be non-empty".into()));
        }
        if self.prop == self.metric || self.prop == self.index || self.metric == self.index {
            return Err(GraphError::InvalidConfig("channel names must be distinct".into()));
        }
        Ok(())
    }
}
