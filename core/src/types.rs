use serde::{Deserialize, Serialize};

use crate::zones::Zone;

/// Én stolpe i live-grafen. Eies av `StreamingBarBuffer` til den skyves ut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBar {
    pub zone: Zone,
    pub height_percent: f64,
    pub width_units: u32,
    pub value: f64, // rå sample (watt), beholdt for reklassifisering
}

/// Ett steg i intervallgrafen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSegment {
    pub zone: Zone,
    pub height_percent: f64,
    pub width_percent: f64, // av foreldregruppen
    pub info_power: String,
    pub info_power_unit: String,
    pub info_time: String,
}

/// Ett intervall: bredde i visningsenheter, steg i rekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGroup {
    pub width_units: u32,
    pub segments: Vec<RenderedSegment>,
}

/// Avgrensningsboks for en intervallgruppe i grafens koordinatrom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupGeometry {
    pub left: f64,
    pub width: f64,
}

/// Posisjon og bredde for progress-overlegget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    pub left: f64,
    pub width: f64,
}

impl From<GroupGeometry> for ProgressState {
    fn from(g: GroupGeometry) -> Self {
        Self {
            left: g.left,
            width: g.width,
        }
    }
}
