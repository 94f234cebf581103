use serde::{Deserialize, Serialize};

/// Terskel brukt når FTP ikke er kjent ennå.
pub const DEFAULT_FTP: f64 = 256.0;

/// Nedre grense (andel av FTP) for sone to..sju, strengt stigende.
pub const ZONE_BOUNDARIES: [f64; 6] = [0.55, 0.76, 0.88, 0.95, 1.06, 1.20];

/// Syv ordnede kraftsoner relativt til en terskel (FTP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::One,
        Zone::Two,
        Zone::Three,
        Zone::Four,
        Zone::Five,
        Zone::Six,
        Zone::Seven,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Zone::One => "one",
            Zone::Two => "two",
            Zone::Three => "three",
            Zone::Four => "four",
            Zone::Five => "five",
            Zone::Six => "six",
            Zone::Seven => "seven",
        }
    }

    /// 1..=7
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Klassenavn som renderlaget bruker, f.eks. `zone-five`.
    pub fn css_class(self) -> String {
        format!("zone-{}", self.name())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Velg terskel: metrikk hvis den er endelig og positiv, ellers `DEFAULT_FTP`.
pub fn effective_threshold(metric: Option<f64>) -> f64 {
    match metric {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => DEFAULT_FTP,
    }
}

/// Klassifiser en verdi mot terskel. Første treff i stigen vinner.
///
/// * manglende eller ugyldig terskel (`<= 0`, uendelig) → `DEFAULT_FTP`
/// * NaN-verdi eller NaN-terskel → `Zone::One`
///
/// Negative verdier og null havner i sone én på vanlig måte.
pub fn classify(value: f64, threshold: Option<f64>) -> Zone {
    if value.is_nan() || threshold.is_some_and(f64::is_nan) {
        return Zone::One;
    }
    let ftp = effective_threshold(threshold);

    ZONE_BOUNDARIES
        .iter()
        .position(|frac| value < ftp * frac)
        .map(|i| Zone::ALL[i])
        .unwrap_or(Zone::Seven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_fall_into_upper_zone() {
        // nøyaktig på grensen → neste sone (streng <)
        assert_eq!(classify(100.0 * 0.55, Some(100.0)), Zone::Two);
        assert_eq!(classify(120.0, Some(100.0)), Zone::Seven);
        assert_eq!(classify(119.999, Some(100.0)), Zone::Six);
    }

    #[test]
    fn number_and_name_agree() {
        for (i, z) in Zone::ALL.iter().enumerate() {
            assert_eq!(z.number() as usize, i + 1);
        }
        assert_eq!(Zone::Four.css_class(), "zone-four");
    }
}
