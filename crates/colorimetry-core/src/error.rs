//! Error types for colorimetric operations.

use thiserror::Error;

/// Precondition violations raised by spectrum construction, lookups and
/// color space derivation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("wavelength and value array sizes do not match: {wavelengths} wavelengths, {values} values")]
    LengthMismatch { wavelengths: usize, values: usize },

    #[error("number of samples must be greater than 1, got {0}")]
    TooFewSamples(usize),

    #[error("invalid range: start {start}, end {end}, step {step}")]
    InvalidRange { start: f32, end: f32, step: f32 },

    #[error("wavelengths must be strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },

    #[error("lambda ({lambda}) is outside the spectrum range [{start}, {end}]")]
    OutOfRange { lambda: f32, start: f32, end: f32 },

    #[error("cannot interpolate a value from a non-uniform spectrum")]
    NonUniform,

    #[error(
        "source range [{source_start}, {source_end}] does not cover target range [{target_start}, {target_end}]"
    )]
    UncoveredRange {
        source_start: f32,
        source_end: f32,
        target_start: f32,
        target_end: f32,
    },

    #[error("curves are not sampled on one wavelength grid: [{start}, {end}) at {step} vs [{other_start}, {other_end}) at {other_step}")]
    GridMismatch {
        start: f32,
        end: f32,
        step: f32,
        other_start: f32,
        other_end: f32,
        other_step: f32,
    },

    #[error("unknown {kind}: {name}")]
    UnknownIdentifier { kind: &'static str, name: String },

    #[error("primaries are degenerate; XYZ to RGB matrix is singular")]
    SingularPrimaries,

    #[error("invalid white point chromaticity ({x}, {y})")]
    InvalidWhitePoint { x: f32, y: f32 },

    #[error("correlated colour temperature {0}K is outside the daylight locus (4000K..=25000K)")]
    InvalidTemperature(f32),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for colorimetric operations.
pub type Result<T> = std::result::Result<T, ColorError>;
