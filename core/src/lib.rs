pub mod config;
pub mod errors;
pub mod host;
pub mod models;
pub mod progress;
pub mod scaling;
pub mod stream;
pub mod telemetry;
pub mod timefmt;
pub mod types;
pub mod workout_graph;
pub mod zones;

#[cfg(feature = "python")]
mod py;

pub use config::{DataGraphConfig, WorkoutGraphConfig};
pub use errors::GraphError;
pub use host::{DataGraph, Host, HostGeometry, WorkoutGraph};
pub use models::{Interval, Step, Workout};
pub use progress::{analytic_layout, locate, AnalyticLayout, GeometrySource};
pub use scaling::scale_height;
pub use stream::{StreamingBarBuffer, ThresholdCell};
pub use types::{GroupGeometry, ProgressState, RenderedBar, RenderedSegment, SegmentGroup};
pub use workout_graph::{build_interval_graph, IntervalGraph};
pub use zones::{classify, effective_threshold, Zone, DEFAULT_FTP};
