use thiserror::Error;

/// Feiltaksonomi for grafkjernen.
///
/// Alle varianter er kontraktsbrudd fra kaller eller ugyldig input;
/// det finnes ingen transiente feil (ren lokal beregning, ingen I/O).
#[derive(Debug, Error)]
pub enum GraphError {
    /// Workout-payload har feil form (f.eks. mangler `steps`).
    #[error("invalid workout at `{path}`: {message}")]
    InvalidWorkout { path: String, message: String },

    /// NaN/uendelig i varighet eller kraft.
    #[error("non-finite {field} in interval {interval} (step {step:?})")]
    NonFinite {
        interval: usize,
        step: Option<usize>,
        field: &'static str,
    },

    /// Indeks utenfor gruppene – klemmes aldri.
    #[error("progress index {index} out of range for {groups} interval group(s)")]
    ProgressIndexOutOfRange { index: usize, groups: usize },

    #[error("invalid payload on channel `{channel}`: {reason}")]
    InvalidPayload { channel: String, reason: String },

    #[error("channel `{0}` is not subscribed by this host")]
    UnknownChannel(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("telemetry registration failed: {0}")]
    Telemetry(#[from] prometheus::Error),
}

impl GraphError {
    pub(crate) fn payload(channel: &str, reason: impl Into<String>) -> Self {
        GraphError::InvalidPayload {
            channel: channel.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for GraphError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        GraphError::InvalidWorkout {
            path,
            message: err.inner().to_string(),
        }
    }
}
