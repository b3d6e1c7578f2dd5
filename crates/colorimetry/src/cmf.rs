//! Colour matching functions (standard observers).

use colorimetry_core::{ColorError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::cie1931;
use crate::spectrum::SampledSpectrum;

/// Identifiers of the bundled standard observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CmfId {
    /// CIE 1931 2° standard observer
    #[default]
    Cie1931TwoDegree,
}

impl CmfId {
    pub const ALL: [CmfId; 1] = [CmfId::Cie1931TwoDegree];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cie1931TwoDegree => "CIE 1931 2°",
        }
    }

    /// Look up an observer by display name or common alias.
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cie 1931 2°" | "cie 1931 2deg" | "cie1931" | "cie_1931_2degree" => {
                Ok(Self::Cie1931TwoDegree)
            }
            _ => Err(ColorError::UnknownIdentifier {
                kind: "colour matching function",
                name: name.to_string(),
            }),
        }
    }

    /// The registered observer for this identifier.
    pub fn cmf(self) -> &'static ColorMatchingFunction {
        ColorMatchingFunction::get(self)
    }
}

/// Three spectral sensitivity curves x̄, ȳ, z̄ sampled on one shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatchingFunction {
    pub x_bar: SampledSpectrum,
    pub y_bar: SampledSpectrum,
    pub z_bar: SampledSpectrum,
}

// Indexed by `CmfId` ordinal.
static REGISTRY: Lazy<[ColorMatchingFunction; 1]> = Lazy::new(|| {
    debug!("materialising colour matching function registry");
    [ColorMatchingFunction {
        x_bar: SampledSpectrum::from_table(cie1931::START, cie1931::STEP, &cie1931::CIE_1931_2_X),
        y_bar: SampledSpectrum::from_table(cie1931::START, cie1931::STEP, &cie1931::CIE_1931_2_Y),
        z_bar: SampledSpectrum::from_table(cie1931::START, cie1931::STEP, &cie1931::CIE_1931_2_Z),
    }]
});

impl ColorMatchingFunction {
    /// Bundle three curves. They must be uniform and share one grid.
    pub fn new(x_bar: SampledSpectrum, y_bar: SampledSpectrum, z_bar: SampledSpectrum) -> Result<Self> {
        if !x_bar.is_uniform() {
            return Err(ColorError::NonUniform);
        }
        for other in [&y_bar, &z_bar] {
            if !x_bar.is_equal_scale(other) {
                return Err(ColorError::GridMismatch {
                    start: x_bar.start(),
                    end: x_bar.end(),
                    step: x_bar.step(),
                    other_start: other.start(),
                    other_end: other.end(),
                    other_step: other.step(),
                });
            }
        }
        Ok(Self { x_bar, y_bar, z_bar })
    }

    /// The registered observer for `id`.
    pub fn get(id: CmfId) -> &'static Self {
        &REGISTRY[id as usize]
    }

    /// The registered observer with the given display name or alias.
    pub fn by_name(name: &str) -> Result<&'static Self> {
        CmfId::from_name(name).map(Self::get)
    }

    /// Lower bound of the shared wavelength range.
    pub fn start(&self) -> f32 {
        self.x_bar.start()
    }

    /// Exclusive upper bound of the shared wavelength range.
    pub fn end(&self) -> f32 {
        self.x_bar.end()
    }
}
