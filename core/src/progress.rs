use crate::errors::GraphError;
use crate::types::{GroupGeometry, ProgressState};
use crate::workout_graph::IntervalGraph;

/// Kilde til geometri for intervallgruppene.
///
/// `AnalyticLayout` regner posisjoner ut fra bredden på gruppene. En vert som
/// må treffe faktisk rendret output implementerer traiten med målte verdier.
/// Geometrien må leses på nytt hver gang grafen bygges om.
pub trait GeometrySource {
    fn group_geometries(&self, graph: &IntervalGraph) -> Vec<GroupGeometry>;
}

/// Gruppe `i` starter ved summen av breddene til gruppene `0..i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticLayout {
    /// Piksler (eller andre enheter) per visningsenhet.
    pub unit: f64,
    pub origin: f64,
}

impl AnalyticLayout {
    pub fn new() -> Self {
        Self {
            unit: 1.0,
            origin: 0.0,
        }
    }
}

impl GeometrySource for AnalyticLayout {
    fn group_geometries(&self, graph: &IntervalGraph) -> Vec<GroupGeometry> {
        let unit = if self.unit > 0.0 { self.unit } else { 1.0 };
        let mut left = self.origin;
        graph
            .groups
            .iter()
            .map(|g| {
                let width = g.width_units as f64 * unit;
                let geom = GroupGeometry { left, width };
                left += width;
                geom
            })
            .collect()
    }
}

/// Layout med 1 enhet per sekund og origo i 0.
pub fn analytic_layout(graph: &IntervalGraph) -> Vec<GroupGeometry> {
    AnalyticLayout::new().group_geometries(graph)
}

/// Avgrensningsboksen til gruppen på `index`. Utenfor området er en
/// kontraktsfeil og klemmes ikke.
pub fn locate(index: usize, geometries: &[GroupGeometry]) -> Result<ProgressState, GraphError> {
    geometries
        .get(index)
        .copied()
        .map(ProgressState::from)
        .ok_or(GraphError::ProgressIndexOutOfRange {
            index,
            groups: geometries.len(),
        })
}
