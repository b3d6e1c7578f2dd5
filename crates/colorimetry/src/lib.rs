//! Colorimetry - spectral power distributions, standard observers and RGB color spaces.
//!
//! Spectra are integrated against a colour matching function (optionally
//! under an illuminant) to tristimulus XYZ, which an [`RgbColorSpace`] turns
//! into encoded RGB.

pub mod cmf;
pub mod color_checker;
pub mod color_space;
pub mod data;
pub mod illuminant;
pub mod integrate;
pub mod spectrum;
pub mod transfer;

pub use cmf::{CmfId, ColorMatchingFunction};
pub use color_checker::{Patch, PatchMismatch, ReflectanceSet};
pub use color_space::{rgb_to_xyz, xyz_to_rgb, ColorSpaceDesc, Primaries, RgbColorSpace, WhitePoint};
pub use illuminant::{daylight, IlluminantId};
pub use integrate::{
    sample_to_xyz, sample_to_xyz_under, spectrum_to_rgb, spectrum_to_xyz, spectrum_to_xyz_under,
    SpectralIntegrator,
};
pub use spectrum::{SampledSpectrum, SpectrumData};
pub use transfer::TransferFunction;

pub use colorimetry_core::{ColorError, Result};
