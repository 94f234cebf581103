use std::collections::VecDeque;

use log::{debug, warn};

use crate::scaling::{scale_height, DEFAULT_BAR_SCALE};
use crate::telemetry;
use crate::types::RenderedBar;
use crate::zones::{classify, effective_threshold};

/// Siste kjente terskelmetrikk. Én skriver (metrikk-kanalen), én leser (sample-kanalen).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdCell {
    latest: Option<f64>,
}

impl ThresholdCell {
    /// Lagre ny verdi. Ugyldig metrikk (≤ 0, NaN/inf) nullstiller til "ukjent".
    pub fn set(&mut self, value: f64) {
        if value.is_finite() && value > 0.0 {
            self.latest = Some(value);
        } else {
            warn!("threshold metric {value} rejected, falling back to default");
            self.latest = None;
        }
    }

    pub fn get(&self) -> Option<f64> {
        self.latest
    }

    /// Terskel som faktisk brukes: metrikken, eller `DEFAULT_FTP`.
    pub fn effective(&self) -> f64 {
        effective_threshold(self.latest)
    }
}

/// Avgrenset, FIFO-evikerende vindu av live-stolper.
///
/// Kapasitet = gulv(visningsbredde), målt én gang ved oppstart. Hver stolpe
/// er 1 enhet bred, så lengden overstiger aldri bredden.
#[derive(Debug, Clone)]
pub struct StreamingBarBuffer {
    bars: VecDeque<RenderedBar>,
    capacity: usize,
    scale: f64,
    threshold: ThresholdCell,
    reclassify_on_metric: bool,
}

impl StreamingBarBuffer {
    pub fn new(display_width: f64) -> Self {
        Self::with_scale(display_width, DEFAULT_BAR_SCALE)
    }

    pub fn with_scale(display_width: f64, scale: f64) -> Self {
        let capacity = if display_width.is_finite() && display_width > 0.0 {
            display_width.floor() as usize
        } else {
            0
        };
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            warn!("bar scale {scale} rejected, using {DEFAULT_BAR_SCALE}");
            DEFAULT_BAR_SCALE
        };
        Self {
            bars: VecDeque::with_capacity(capacity),
            capacity,
            scale,
            threshold: ThresholdCell::default(),
            reclassify_on_metric: false,
        }
    }

    /// Slå på reklassifisering av eksisterende stolper når metrikken endres.
    pub fn reclassify_on_metric(mut self, on: bool) -> Self {
        self.reclassify_on_metric = on;
        self
    }

    /// Ny terskel. Eksisterende stolper beholder sin sone med mindre
    /// reklassifisering er slått på.
    pub fn on_metric(&mut self, value: f64) {
        self.threshold.set(value);
        telemetry::inc_threshold_updates();

        if self.reclassify_on_metric {
            let ftp = self.threshold.effective();
            for bar in self.bars.iter_mut() {
                bar.zone = classify(bar.value, Some(ftp));
            }
            debug!("reclassified {} bar(s) against ftp={ftp}", self.bars.len());
        }
    }

    /// Nytt sample: klassifiser mot siste kjente terskel, skaler, legg til bakerst.
    pub fn on_sample(&mut self, value: f64) {
        telemetry::inc_samples();

        if self.capacity == 0 {
            debug!("display width below one unit, sample {value} dropped");
            return;
        }

        while self.bars.len() >= self.capacity {
            if let Some(old) = self.bars.pop_front() {
                debug!("bar evicted: {} W ({})", old.value, old.zone);
                telemetry::inc_evicted();
            }
        }

        let bar = RenderedBar {
            zone: classify(value, Some(self.threshold.effective())),
            height_percent: scale_height(self.scale, value),
            width_units: 1,
            value,
        };
        debug!("bar appended: {value} W → {} ({:.1} %)", bar.zone, bar.height_percent);
        self.bars.push_back(bar);
    }

    /// Stolper i ankomstrekkefølge (eldste først).
    pub fn bars(&self) -> impl Iterator<Item = &RenderedBar> + '_ {
        self.bars.iter()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold.get()
    }

    pub fn clear(&mut self) {
        self.bars.clear();
    }
}
