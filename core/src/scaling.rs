/// Standard vertikal skala for live-grafen (watt ved 100 % høyde).
pub const DEFAULT_BAR_SCALE: f64 = 400.0;

/// Takhøyde i intervallgrafen: skala = FTP × 1.6 så sone sju ikke klippes.
pub const GRAPH_HEADROOM: f64 = 1.6;

/// Verdien et "free ride"-steg tegnes med, så det ikke kollapser til null.
pub const FREE_RIDE_VALUE: f64 = 80.0;

/// Høyde i prosent: `100 * value / max`.
///
/// `max == 0` gir inf/NaN; kallere leverer alltid en positiv skala.
#[inline]
pub fn scale_height(max: f64, value: f64) -> f64 {
    100.0 * (value / max)
}
