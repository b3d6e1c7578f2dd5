//! Transfer functions (OETF/EOTF) for the supported RGB encodings.
#![allow(clippy::excessive_precision)]

use colorimetry_core::RgbF32;
use serde::{Deserialize, Serialize};

/// Transfer function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransferFunction {
    #[default]
    Linear,
    /// IEC 61966-2-1 sRGB
    Srgb,
    /// ITU-R BT.709
    Rec709,
}

impl TransferFunction {
    /// Opto-electronic transfer: linear light to encoded signal.
    pub fn encode(self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::Srgb => {
                if v <= 0.0031308 {
                    12.92 * v
                } else {
                    1.055 * v.powf(1.0 / 2.4) - 0.055
                }
            }
            Self::Rec709 => {
                if v <= 0.018 {
                    4.5 * v
                } else {
                    1.099 * v.powf(0.45) - 0.099
                }
            }
        }
    }

    /// Electro-optical transfer: encoded signal back to linear light.
    pub fn decode(self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::Srgb => {
                if v <= 0.040449936 {
                    v / 12.92
                } else {
                    ((v + 0.055) / 1.055).powf(2.4)
                }
            }
            Self::Rec709 => {
                if v <= 0.018 * 4.5 {
                    v / 4.5
                } else {
                    ((v + 0.099) / 1.099).powf(1.0 / 0.45)
                }
            }
        }
    }

    /// Apply [`Self::encode`] to every channel.
    pub fn encode_rgb(self, c: RgbF32) -> RgbF32 {
        c.map(|v| self.encode(v))
    }

    /// Apply [`Self::decode`] to every channel.
    pub fn decode_rgb(self, c: RgbF32) -> RgbF32 {
        c.map(|v| self.decode(v))
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Srgb => "sRGB",
            Self::Rec709 => "Rec. 709",
        }
    }
}
