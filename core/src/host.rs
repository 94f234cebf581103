//! Verter som kobler grafkjernen til en publiser/abonner-buss.
//!
//! Bussen selv ligger utenfor kjernen. En vert oppgir hvilke kanaler den
//! lytter på (`channels`), bussen leverer hver hendelse via `dispatch`, og
//! `detach` melder verten av. Etter `detach` ignoreres alle hendelser uten at
//! tilstanden endres. Håndtererne er synkrone og ikke-reentrante.

use log::{debug, info};
use serde_json::Value;

use crate::config::{channel_name, DataGraphConfig, WorkoutGraphConfig};
use crate::errors::GraphError;
use crate::models::Workout;
use crate::progress::{locate, AnalyticLayout, GeometrySource};
use crate::stream::{StreamingBarBuffer, ThresholdCell};
use crate::types::{GroupGeometry, ProgressState, RenderedBar};
use crate::workout_graph::{build_interval_graph, IntervalGraph};

/// Synkron spørring mot vertens rendrede størrelse.
pub trait HostGeometry {
    /// Visningsbredde i samme enheter som stolpebredden.
    fn display_width(&self) -> f64;
}

impl HostGeometry for f64 {
    fn display_width(&self) -> f64 {
        *self
    }
}

pub trait Host {
    /// Kanalene verten abonnerer på (`db:<navn>`).
    fn channels(&self) -> Vec<String>;
    fn dispatch(&mut self, channel: &str, payload: &Value) -> Result<(), GraphError>;
    fn detach(&mut self);
    fn is_attached(&self) -> bool;
}

fn number_payload(channel: &str, payload: &Value) -> Result<f64, GraphError> {
    payload
        .as_f64()
        .ok_or_else(|| GraphError::payload(channel, format!("expected a number, got {payload}")))
}

fn index_payload(channel: &str, payload: &Value) -> Result<usize, GraphError> {
    payload
        .as_u64()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| GraphError::payload(channel, format!("expected an interval index, got {payload}")))
}

// ──────────────────────────────────────────────────────────────────────────────
// Live-graf
// ──────────────────────────────────────────────────────────────────────────────

pub struct DataGraph {
    sample_channel: String,
    metric_channel: String,
    buffer: StreamingBarBuffer,
    attached: bool,
}

impl DataGraph {
    /// Bredden leses én gang her og måles ikke på nytt ved resize.
    pub fn attach(config: &DataGraphConfig, geometry: &dyn HostGeometry) -> Result<Self, GraphError> {
        config.validate()?;
        let width = geometry.display_width();
        let buffer = StreamingBarBuffer::with_scale(width, config.scale)
            .reclassify_on_metric(config.reclassify_on_metric);

        let host = Self {
            sample_channel: channel_name(&config.prop),
            metric_channel: channel_name(&config.metric),
            buffer,
            attached: true,
        };
        info!(
            "data graph attached: {} / {} (width={width}, capacity={})",
            host.sample_channel,
            host.metric_channel,
            host.buffer.capacity()
        );
        Ok(host)
    }

    pub fn bars(&self) -> impl Iterator<Item = &RenderedBar> + '_ {
        self.buffer.bars()
    }

    pub fn buffer(&self) -> &StreamingBarBuffer {
        &self.buffer
    }
}

impl Host for DataGraph {
    fn channels(&self) -> Vec<String> {
        vec![self.sample_channel.clone(), self.metric_channel.clone()]
    }

    fn dispatch(&mut self, channel: &str, payload: &Value) -> Result<(), GraphError> {
        if !self.attached {
            debug!("data graph detached, event on {channel} ignored");
            return Ok(());
        }
        if channel == self.sample_channel {
            let value = number_payload(channel, payload)?;
            self.buffer.on_sample(value);
        } else if channel == self.metric_channel {
            let value = number_payload(channel, payload)?;
            self.buffer.on_metric(value);
        } else {
            return Err(GraphError::UnknownChannel(channel.to_string()));
        }
        Ok(())
    }

    fn detach(&mut self) {
        if self.attached {
            info!("data graph detached from {}", self.sample_channel);
        }
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Øktgraf
// ──────────────────────────────────────────────────────────────────────────────

pub struct WorkoutGraph<G: GeometrySource = AnalyticLayout> {
    workout_channel: String,
    metric_channel: String,
    index_channel: String,
    layout: G,
    workout: Option<Workout>,
    metric: ThresholdCell,
    graph: Option<IntervalGraph>,
    geometries: Vec<GroupGeometry>,
    index: Option<usize>,
    progress: Option<ProgressState>,
    attached: bool,
}

impl WorkoutGraph<AnalyticLayout> {
    pub fn attach(config: &WorkoutGraphConfig) -> Result<Self, GraphError> {
        Self::attach_with_layout(config, AnalyticLayout::new())
    }
}

impl<G: GeometrySource> WorkoutGraph<G> {
    /// Som `attach`, men med målt geometri fra verten.
    pub fn attach_with_layout(config: &WorkoutGraphConfig, layout: G) -> Result<Self, GraphError> {
        config.validate()?;
        let host = Self {
            workout_channel: channel_name(&config.prop),
            metric_channel: channel_name(&config.metric),
            index_channel: channel_name(&config.index),
            layout,
            workout: None,
            metric: ThresholdCell::default(),
            graph: None,
            geometries: Vec::new(),
            index: None,
            progress: None,
            attached: true,
        };
        info!("workout graph attached: {}", host.workout_channel);
        Ok(host)
    }

    /// Ny økt: bygg grafen og nullstill progress.
    pub fn on_workout(&mut self, workout: Workout) -> Result<(), GraphError> {
        let (graph, geometries) = self.render(&workout, self.metric)?;
        self.workout = Some(workout);
        self.graph = Some(graph);
        self.geometries = geometries;
        self.index = None;
        self.progress = None;
        Ok(())
    }

    /// Ny FTP: full ombygging, og progress flyttes til ny geometri.
    pub fn on_metric(&mut self, value: f64) -> Result<(), GraphError> {
        let mut metric = self.metric;
        metric.set(value);

        if let Some(workout) = &self.workout {
            let (graph, geometries) = self.render(workout, metric)?;
            let progress = match self.index {
                Some(i) => Some(locate(i, &geometries)?),
                None => None,
            };
            self.graph = Some(graph);
            self.geometries = geometries;
            self.progress = progress;
        }
        self.metric = metric;
        Ok(())
    }

    /// Gjeldende intervall. Ugyldig indeks endrer ingenting.
    pub fn on_index(&mut self, index: usize) -> Result<(), GraphError> {
        let progress = locate(index, &self.geometries)?;
        self.index = Some(index);
        self.progress = Some(progress);
        debug!("progress at interval {index}: left={} width={}", progress.left, progress.width);
        Ok(())
    }

    fn render(
        &self,
        workout: &Workout,
        metric: ThresholdCell,
    ) -> Result<(IntervalGraph, Vec<GroupGeometry>), GraphError> {
        let graph = build_interval_graph(workout, metric.effective())?;
        let geometries = self.layout.group_geometries(&graph);
        Ok((graph, geometries))
    }

    pub fn graph(&self) -> Option<&IntervalGraph> {
        self.graph.as_ref()
    }

    pub fn geometries(&self) -> &[GroupGeometry] {
        &self.geometries
    }

    pub fn progress(&self) -> Option<ProgressState> {
        self.progress
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl<G: GeometrySource> Host for WorkoutGraph<G> {
    fn channels(&self) -> Vec<String> {
        vec![
            self.workout_channel.clone(),
            self.metric_channel.clone(),
            self.index_channel.clone(),
        ]
    }

    fn dispatch(&mut self, channel: &str, payload: &Value) -> Result<(), GraphError> {
        if !self.attached {
            debug!("workout graph detached, event on {channel} ignored");
            return Ok(());
        }
        if channel == self.workout_channel {
            let workout = Workout::from_value(payload)?;
            self.on_workout(workout)
        } else if channel == self.metric_channel {
            let value = number_payload(channel, payload)?;
            self.on_metric(value)
        } else if channel == self.index_channel {
            let index = index_payload(channel, payload)?;
            self.on_index(index)
        } else {
            Err(GraphError::UnknownChannel(channel.to_string()))
        }
    }

    fn detach(&mut self) {
        if self.attached {
            info!("workout graph detached from {}", self.workout_channel);
        }
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
