//! Standard illuminants.
//!
//! D65 is the tabulated CIE spectrum. D50, D55 and D60 are reconstructed
//! from the CIE daylight basis functions at their nominal correlated colour
//! temperatures; E is the equal-energy illuminant.

use colorimetry_core::{ColorError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{d65, daylight as basis};
use crate::spectrum::SampledSpectrum;

/// Ratio of the current to the historical second radiation constant
/// (c2 = 1.4388e-2 vs 1.4380e-2 m·K); nominal D-series temperatures are
/// scaled by it.
const C2_RATIO: f32 = 1.4388 / 1.4380;

/// Identifiers of the registered illuminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IlluminantId {
    D50,
    D55,
    D60,
    #[default]
    D65,
    /// Equal energy
    E,
}

impl IlluminantId {
    pub const ALL: [IlluminantId; 5] = [Self::D50, Self::D55, Self::D60, Self::D65, Self::E];

    pub fn name(self) -> &'static str {
        match self {
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D60 => "D60",
            Self::D65 => "D65",
            Self::E => "E",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ColorError::UnknownIdentifier {
                kind: "illuminant",
                name: name.to_string(),
            })
    }

    /// Nominal correlated colour temperature of the daylight illuminants.
    pub fn nominal_cct(self) -> Option<f32> {
        match self {
            Self::D50 => Some(5000.0),
            Self::D55 => Some(5500.0),
            Self::D60 => Some(6000.0),
            Self::D65 => Some(6500.0),
            Self::E => None,
        }
    }

    /// The registered spectrum for this illuminant.
    pub fn spectrum(self) -> &'static SampledSpectrum {
        &REGISTRY[self as usize]
    }
}

// Indexed by `IlluminantId` ordinal.
static REGISTRY: Lazy<[SampledSpectrum; 5]> = Lazy::new(|| {
    debug!("materialising illuminant registry");
    [
        daylight_spectrum(5000.0 * C2_RATIO),
        daylight_spectrum(5500.0 * C2_RATIO),
        daylight_spectrum(6000.0 * C2_RATIO),
        SampledSpectrum::from_table(d65::START, d65::STEP, &d65::D65),
        SampledSpectrum::from_table(d65::START, d65::STEP, &[100.0; 81]),
    ]
});

/// CIE daylight spectrum for a correlated colour temperature in kelvin.
///
/// Valid for 4000 K to 25000 K.
pub fn daylight(cct: f32) -> Result<SampledSpectrum> {
    if !(4000.0..=25000.0).contains(&cct) {
        return Err(ColorError::InvalidTemperature(cct));
    }
    Ok(daylight_spectrum(cct))
}

fn daylight_spectrum(cct: f32) -> SampledSpectrum {
    let (m1, m2) = daylight_weights(cct);
    let values: Vec<f32> = basis::S0
        .iter()
        .zip(basis::S1.iter())
        .zip(basis::S2.iter())
        .map(|((s0, s1), s2)| s0 + m1 * s1 + m2 * s2)
        .collect();
    SampledSpectrum::from_table(basis::START, basis::STEP, &values)
}

/// Weights of S1 and S2 for the daylight locus chromaticity at `cct`,
/// rounded to three decimals.
fn daylight_weights(cct: f32) -> (f32, f32) {
    let t = f64::from(cct);
    let xd = if t <= 7000.0 {
        -4.6070e9 / t.powi(3) + 2.9678e6 / t.powi(2) + 0.09911e3 / t + 0.244063
    } else {
        -2.0064e9 / t.powi(3) + 1.9018e6 / t.powi(2) + 0.24748e3 / t + 0.237040
    };
    let yd = -3.0 * xd * xd + 2.87 * xd - 0.275;

    let m = 0.0241 + 0.2562 * xd - 0.7341 * yd;
    let m1 = (-1.3515 - 1.7703 * xd + 5.9114 * yd) / m;
    let m2 = (0.0300 - 31.4424 * xd + 30.0717 * yd) / m;

    let round3 = |v: f64| ((v * 1000.0).round() / 1000.0) as f32;
    (round3(m1), round3(m2))
}
