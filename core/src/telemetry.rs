use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::errors::GraphError;

/// Tellere for grafkjernen, registrert i eget `Registry`.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub samples_total: IntCounter,
    pub bars_evicted_total: IntCounter,
    pub graph_builds_total: IntCounter,
    pub threshold_updates_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, GraphError> {
        let registry = Registry::new();

        let samples_total = counter(&registry, "zonegraph_samples_total", "Power samples appended to live graphs")?;
        let bars_evicted_total = counter(
            &registry,
            "zonegraph_bars_evicted_total",
            "Bars evicted from the sliding window",
        )?;
        let graph_builds_total = counter(
            &registry,
            "zonegraph_graph_builds_total",
            "Interval graphs built from a workout",
        )?;
        let threshold_updates_total = counter(
            &registry,
            "zonegraph_threshold_updates_total",
            "Threshold metric updates received",
        )?;

        Ok(Self {
            registry,
            samples_total,
            bars_evicted_total,
            graph_builds_total,
            threshold_updates_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus tekstformat.
    pub fn export_text(&self) -> Result<String, GraphError> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter, GraphError> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

static GLOBAL: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(m) => Some(m),
    Err(e) => {
        log::warn!("telemetry disabled: {e}");
        None
    }
});

/// Prosessvid instans. `None` hvis registreringen feilet.
pub fn global() -> Option<&'static Metrics> {
    GLOBAL.as_ref()
}

pub(crate) fn inc_samples() {
    if let Some(m) = global() {
        m.samples_total.inc();
    }
}

pub(crate) fn inc_evicted() {
    if let Some(m) = global() {
        m.bars_evicted_total.inc();
    }
}

pub(crate) fn inc_builds() {
    if let Some(m) = global() {
        m.graph_builds_total.inc();
    }
}

pub(crate) fn inc_threshold_updates() {
    if let Some(m) = global() {
        m.threshold_updates_total.inc();
    }
}
