use log::{debug, warn};
use serde::Serialize;

use crate::errors::GraphError;
use crate::models::{Interval, Step, Workout};
use crate::scaling::{scale_height, FREE_RIDE_VALUE, GRAPH_HEADROOM};
use crate::telemetry;
use crate::timefmt::seconds_to_hms;
use crate::types::{RenderedSegment, SegmentGroup};
use crate::zones::{classify, effective_threshold};

/// Ferdig intervallgraf: én gruppe per intervall, ett segment per steg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalGraph {
    pub threshold: f64,
    pub scale: f64,
    pub groups: Vec<SegmentGroup>,
}

impl IntervalGraph {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn step_count(&self) -> usize {
        self.groups.iter().map(|g| g.segments.len()).sum()
    }

    /// Samlet bredde i visningsenheter.
    pub fn total_units(&self) -> u64 {
        self.groups.iter().map(|g| g.width_units as u64).sum()
    }
}

/// Bygg grafen fra bunnen av. Ren funksjon: samme (workout, ftp) → samme graf.
///
/// Ugyldig FTP (≤ 0, NaN) erstattes med `DEFAULT_FTP` så skalaen alltid er positiv.
pub fn build_interval_graph(workout: &Workout, ftp: f64) -> Result<IntervalGraph, GraphError> {
    workout.validate()?;

    let threshold = effective_threshold(Some(ftp));
    if threshold != ftp {
        warn!("ftp {ftp} unusable for interval graph, using {threshold}");
    }
    let scale = threshold * GRAPH_HEADROOM;

    let groups: Vec<SegmentGroup> = workout
        .intervals
        .iter()
        .map(|interval| build_group(interval, threshold, scale))
        .collect();

    telemetry::inc_builds();
    debug!(
        "interval graph built: {} group(s), {} step(s), ftp={threshold}",
        groups.len(),
        workout.step_count()
    );

    Ok(IntervalGraph {
        threshold,
        scale,
        groups,
    })
}

/// Intervall under 1 sek reserverer likevel 1 enhet.
fn group_width(duration: f64) -> u32 {
    if duration < 1.0 {
        1
    } else {
        duration.round().min(u32::MAX as f64) as u32
    }
}

fn build_group(interval: &Interval, ftp: f64, scale: f64) -> SegmentGroup {
    let steps_count = interval.steps.len();
    let segments = interval
        .steps
        .iter()
        .map(|step| build_segment(step, steps_count, ftp, scale))
        .collect();

    SegmentGroup {
        width_units: group_width(interval.duration),
        segments,
    }
}

fn build_segment(step: &Step, steps_count: usize, ftp: f64, scale: f64) -> RenderedSegment {
    let power = (ftp * step.power).round();
    let free_ride = power == 0.0;

    let height_percent = scale_height(scale, if free_ride { FREE_RIDE_VALUE } else { power });
    let (info_power, info_power_unit) = if free_ride {
        ("Free ride".to_string(), String::new())
    } else {
        (format!("{power}"), "W".to_string())
    };

    RenderedSegment {
        zone: classify(power, Some(ftp)),
        height_percent,
        width_percent: 100.0 / steps_count as f64,
        info_power,
        info_power_unit,
        info_time: seconds_to_hms(step.duration, true),
    }
}
