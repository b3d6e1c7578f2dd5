//! 24-patch colour checker (BabelColor average) reference values.
//!
//! Each patch carries its published 8-bit sRGB value. Measured reflectance
//! spectra are supplied by the caller through a [`ReflectanceSet`], which can
//! check them against the references.

use std::collections::BTreeMap;

use colorimetry_core::{ColorError, Result, RgbU8};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color_space::RgbColorSpace;
use crate::integrate::spectrum_to_rgb;
use crate::spectrum::SampledSpectrum;

/// Colour checker patches in chart order (row by row, from top left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Patch {
    DarkSkin,
    LightSkin,
    BlueSky,
    Foliage,
    BlueFlower,
    BluishGreen,
    Orange,
    PurplishBlue,
    ModerateRed,
    Purple,
    YellowGreen,
    OrangeYellow,
    Blue,
    Green,
    Red,
    Yellow,
    Magenta,
    Cyan,
    #[serde(rename = "white_95")]
    White95,
    #[serde(rename = "neutral_80")]
    Neutral80,
    #[serde(rename = "neutral_65")]
    Neutral65,
    #[serde(rename = "neutral_50")]
    Neutral50,
    #[serde(rename = "neutral_35")]
    Neutral35,
    #[serde(rename = "black_20")]
    Black20,
}

impl Patch {
    pub const ALL: [Patch; 24] = [
        Self::DarkSkin,
        Self::LightSkin,
        Self::BlueSky,
        Self::Foliage,
        Self::BlueFlower,
        Self::BluishGreen,
        Self::Orange,
        Self::PurplishBlue,
        Self::ModerateRed,
        Self::Purple,
        Self::YellowGreen,
        Self::OrangeYellow,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
        Self::White95,
        Self::Neutral80,
        Self::Neutral65,
        Self::Neutral50,
        Self::Neutral35,
        Self::Black20,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DarkSkin => "dark_skin",
            Self::LightSkin => "light_skin",
            Self::BlueSky => "blue_sky",
            Self::Foliage => "foliage",
            Self::BlueFlower => "blue_flower",
            Self::BluishGreen => "bluish_green",
            Self::Orange => "orange",
            Self::PurplishBlue => "purplish_blue",
            Self::ModerateRed => "moderate_red",
            Self::Purple => "purple",
            Self::YellowGreen => "yellow_green",
            Self::OrangeYellow => "orange_yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White95 => "white_95",
            Self::Neutral80 => "neutral_80",
            Self::Neutral65 => "neutral_65",
            Self::Neutral50 => "neutral_50",
            Self::Neutral35 => "neutral_35",
            Self::Black20 => "black_20",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name.trim())
            .ok_or_else(|| ColorError::UnknownIdentifier {
                kind: "colour checker patch",
                name: name.to_string(),
            })
    }

    /// Published 8-bit sRGB value.
    pub fn srgb_reference(self) -> RgbU8 {
        let [r, g, b] = match self {
            Self::DarkSkin => [115, 82, 68],
            Self::LightSkin => [194, 150, 130],
            Self::BlueSky => [98, 122, 157],
            Self::Foliage => [87, 108, 67],
            Self::BlueFlower => [133, 128, 177],
            Self::BluishGreen => [103, 189, 170],
            Self::Orange => [214, 126, 44],
            Self::PurplishBlue => [80, 91, 166],
            Self::ModerateRed => [193, 90, 99],
            Self::Purple => [94, 60, 108],
            Self::YellowGreen => [157, 188, 64],
            Self::OrangeYellow => [224, 163, 46],
            Self::Blue => [56, 61, 150],
            Self::Green => [70, 148, 73],
            Self::Red => [175, 54, 60],
            Self::Yellow => [231, 199, 31],
            Self::Magenta => [187, 86, 149],
            Self::Cyan => [8, 133, 161],
            Self::White95 => [243, 243, 242],
            Self::Neutral80 => [200, 200, 200],
            Self::Neutral65 => [160, 160, 160],
            Self::Neutral50 => [122, 122, 121],
            Self::Neutral35 => [85, 85, 85],
            Self::Black20 => [52, 52, 52],
        };
        RgbU8::new(r, g, b)
    }
}

/// A patch whose converted colour differs from its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchMismatch {
    pub patch: Patch,
    pub expected: RgbU8,
    pub actual: RgbU8,
}

/// Reflectance spectra keyed by patch. Not every patch needs to be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReflectanceSet {
    spectra: BTreeMap<Patch, SampledSpectrum>,
}

impl ReflectanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object mapping patch names to
    /// `{ "wavelengths": [...], "values": [...] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, SampledSpectrum> =
            serde_json::from_str(json).map_err(|e| ColorError::Parse(e.to_string()))?;

        let mut set = Self::new();
        for (name, spectrum) in raw {
            set.insert(Patch::from_name(&name)?, spectrum);
        }
        debug!(patches = set.len(), "loaded reflectance set");
        Ok(set)
    }

    /// Insert or replace the spectrum for `patch`.
    pub fn insert(&mut self, patch: Patch, spectrum: SampledSpectrum) -> Option<SampledSpectrum> {
        self.spectra.insert(patch, spectrum)
    }

    pub fn get(&self, patch: Patch) -> Option<&SampledSpectrum> {
        self.spectra.get(&patch)
    }

    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Patch, &SampledSpectrum)> {
        self.spectra.iter().map(|(p, s)| (*p, s))
    }

    /// 8-bit colour of every present patch in `space`.
    pub fn to_rgb_u8(&self, space: &RgbColorSpace) -> Vec<(Patch, RgbU8)> {
        self.iter()
            .map(|(patch, spectrum)| (patch, spectrum_to_rgb(spectrum, space).to_unsigned::<u8>()))
            .collect()
    }

    /// Convert every present patch into `space` and compare with the
    /// published sRGB reference. Returns the patches that differ.
    pub fn verify(&self, space: &RgbColorSpace) -> Vec<PatchMismatch> {
        let mismatches: Vec<PatchMismatch> = self
            .to_rgb_u8(space)
            .into_iter()
            .filter_map(|(patch, actual)| {
                let expected = patch.srgb_reference();
                (actual != expected).then_some(PatchMismatch {
                    patch,
                    expected,
                    actual,
                })
            })
            .collect();

        for m in &mismatches {
            debug!(patch = m.patch.name(), expected = %m.expected, actual = %m.actual, "patch mismatch");
        }
        mismatches
    }
}
