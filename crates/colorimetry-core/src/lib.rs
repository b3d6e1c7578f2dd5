//! Colorimetry Core - value types shared across the colorimetry crates
//!
//! - RGB triples with half/single/double float and unsigned channels
//! - Tristimulus (XYZ) and chromaticity (xy) aliases over `glam` vectors
//! - Error type for precondition violations

pub mod error;
pub mod math;
pub mod rgb;
pub mod xyz;

pub use error::{ColorError, Result};
pub use math::{clamp, lerp};
pub use rgb::{Rgb, RgbF16, RgbF32, RgbF64, RgbU16, RgbU32, RgbU8, UnsignedChannel};
pub use xyz::{chromaticity_of, xyz_from_chromaticity, Chromaticity, Xyz};
