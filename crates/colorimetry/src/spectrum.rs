//! Sampled spectral power distributions.
//!
//! A [`SampledSpectrum`] is an ordered list of `(wavelength, value)` samples
//! with strictly increasing wavelengths. Spectra built on a regular grid are
//! *uniform* and carry their spacing in [`SampledSpectrum::step`]; spectra
//! built from arbitrary wavelength lists may be irregular, in which case the
//! step is `0`.
//!
//! For uniform spectra the range is half-open: [`SampledSpectrum::end`] is one
//! step past the last sample.

use std::fmt;

use colorimetry_core::{lerp, ColorError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Relative tolerance used when comparing wavelength gaps.
const SPACING_TOLERANCE: f32 = 1e-4;

/// A spectral power distribution sampled at discrete wavelengths (nm).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SpectrumData", into = "SpectrumData")]
pub struct SampledSpectrum {
    // zero when the samples are irregularly spaced
    step: f32,
    wavelengths: Vec<f32>,
    values: Vec<f32>,
}

/// Serialized form of a [`SampledSpectrum`]: parallel wavelength and value
/// arrays. Deserializing validates it like [`SampledSpectrum::from_samples`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumData {
    pub wavelengths: Vec<f32>,
    pub values: Vec<f32>,
}

impl TryFrom<SpectrumData> for SampledSpectrum {
    type Error = ColorError;

    fn try_from(data: SpectrumData) -> Result<Self> {
        Self::from_samples(data.wavelengths, data.values)
    }
}

impl From<SampledSpectrum> for SpectrumData {
    fn from(spectrum: SampledSpectrum) -> Self {
        Self {
            wavelengths: spectrum.wavelengths,
            values: spectrum.values,
        }
    }
}

/// Wavelengths `start, start + step, ...` strictly below `end`.
fn uniform_grid(start: f32, end: f32, step: f32) -> Result<Vec<f32>> {
    let valid = start.is_finite() && end.is_finite() && step > 0.0 && end >= start + step;
    if !valid {
        return Err(ColorError::InvalidRange { start, end, step });
    }

    let span = (end - start) / step;
    let count = if (span - span.round()).abs() < SPACING_TOLERANCE {
        span.round()
    } else {
        span.ceil()
    } as usize;

    if count < 2 {
        return Err(ColorError::TooFewSamples(count));
    }

    Ok((0..count).map(|i| start + i as f32 * step).collect())
}

impl SampledSpectrum {
    /// Uniform spectrum over `[start, end)` with every sample set to `value`.
    pub fn filled(start: f32, end: f32, step: f32, value: f32) -> Result<Self> {
        let wavelengths = uniform_grid(start, end, step)?;
        let values = vec![value; wavelengths.len()];
        Ok(Self {
            step,
            wavelengths,
            values,
        })
    }

    /// Uniform spectrum over `[start, end)` holding `values`, one per step.
    pub fn from_values(start: f32, end: f32, step: f32, values: Vec<f32>) -> Result<Self> {
        let wavelengths = uniform_grid(start, end, step)?;
        if wavelengths.len() != values.len() {
            return Err(ColorError::LengthMismatch {
                wavelengths: wavelengths.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            step,
            wavelengths,
            values,
        })
    }

    /// Spectrum from explicit wavelength/value arrays. The spacing is
    /// detected: if every gap matches the first one the spectrum is uniform,
    /// otherwise it is irregular.
    pub fn from_samples(wavelengths: Vec<f32>, values: Vec<f32>) -> Result<Self> {
        if wavelengths.len() != values.len() {
            return Err(ColorError::LengthMismatch {
                wavelengths: wavelengths.len(),
                values: values.len(),
            });
        }
        if wavelengths.len() < 2 {
            return Err(ColorError::TooFewSamples(wavelengths.len()));
        }
        if let Some(index) = wavelengths.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(ColorError::NotIncreasing { index: index + 1 });
        }

        let first_gap = wavelengths[1] - wavelengths[0];
        let uniform = wavelengths
            .windows(2)
            .all(|w| ((w[1] - w[0]) - first_gap).abs() <= first_gap * SPACING_TOLERANCE);
        let step = if uniform { first_gap } else { 0.0 };

        Ok(Self {
            step,
            wavelengths,
            values,
        })
    }

    /// Uniform spectrum from a bundled table. Table lengths are fixed at
    /// compile time, so this skips validation.
    pub(crate) fn from_table(start: f32, step: f32, values: &[f32]) -> Self {
        debug_assert!(values.len() > 1, "table must hold more than one sample");
        Self {
            step,
            wavelengths: (0..values.len()).map(|i| start + i as f32 * step).collect(),
            values: values.to_vec(),
        }
    }

    /// First sampled wavelength.
    #[inline]
    pub fn start(&self) -> f32 {
        self.wavelengths[0]
    }

    /// Exclusive upper bound: one step past the last sample. Equal to the
    /// last wavelength for irregular spectra.
    #[inline]
    pub fn end(&self) -> f32 {
        self.last_wavelength() + self.step
    }

    /// Sample spacing, or `0` for irregular spectra.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.wavelengths.len()
    }

    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.step != 0.0
    }

    #[inline]
    pub fn wavelengths(&self) -> &[f32] {
        &self.wavelengths
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Iterate `(wavelength, value)` pairs in increasing wavelength order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.wavelengths.iter().copied().zip(self.values.iter().copied())
    }

    #[inline]
    fn last_wavelength(&self) -> f32 {
        self.wavelengths[self.wavelengths.len() - 1]
    }

    /// Linearly interpolated value at `lambda`.
    ///
    /// The spectrum must be uniform and `lambda` must lie in
    /// `[start, end]`; both are checked in debug builds. Release builds clamp
    /// `lambda` to the sampled range. Use [`Self::try_value_at`] for a checked
    /// lookup in every build.
    pub fn value_at(&self, lambda: f32) -> f32 {
        debug_assert!(
            lambda >= self.start(),
            "lambda ({lambda}) is less than beginning of spectrum range ({})",
            self.start()
        );
        debug_assert!(
            lambda <= self.end(),
            "lambda ({lambda}) is greater than end of spectrum range ({})",
            self.end()
        );
        debug_assert!(
            self.is_uniform(),
            "cannot interpolate value from non-uniform spectrum"
        );
        self.interpolate_uniform(lambda)
    }

    /// Checked variant of [`Self::value_at`].
    pub fn try_value_at(&self, lambda: f32) -> Result<f32> {
        if !self.is_uniform() {
            return Err(ColorError::NonUniform);
        }
        if !(lambda >= self.start() && lambda <= self.end()) {
            return Err(ColorError::OutOfRange {
                lambda,
                start: self.start(),
                end: self.end(),
            });
        }
        Ok(self.interpolate_uniform(lambda))
    }

    /// Index is estimated assuming uniform spacing; the interpolation weight
    /// uses the actual neighbouring wavelengths.
    fn interpolate_uniform(&self, lambda: f32) -> f32 {
        let n = self.wavelengths.len();
        let start = self.start();
        let lambda = lambda.max(start).min(self.last_wavelength());

        let t = (lambda - start) / (self.end() - start);
        let i0 = ((t * n as f32).floor() as usize).min(n - 1);
        if i0 + 1 < n {
            let w0 = self.wavelengths[i0];
            let w1 = self.wavelengths[i0 + 1];
            lerp(self.values[i0], self.values[i0 + 1], (lambda - w0) / (w1 - w0))
        } else {
            self.values[i0]
        }
    }

    /// Value at `lambda` from the bracketing samples, for any spacing.
    /// Below the first sample the first value is used, above the last the
    /// last value.
    fn sample_bracketed(&self, lambda: f32) -> f32 {
        let j = self.wavelengths.partition_point(|&w| w < lambda);
        if j == 0 {
            return self.values[0];
        }
        if j == self.wavelengths.len() {
            return self.values[j - 1];
        }
        let w0 = self.wavelengths[j - 1];
        let w1 = self.wavelengths[j];
        lerp(self.values[j - 1], self.values[j], (lambda - w0) / (w1 - w0))
    }

    /// True if `other` has the same start, end, step and wavelengths.
    pub fn is_equal_scale(&self, other: &Self) -> bool {
        self.start() == other.start()
            && self.end() == other.end()
            && self.step == other.step
            && self.wavelengths == other.wavelengths
    }

    /// Resample `source` onto this spectrum's own wavelength grid,
    /// overwriting the values. `source` must cover this spectrum's sampled
    /// range; no extrapolation is performed.
    pub fn interpolate_from(&mut self, source: &Self) -> Result<()> {
        if self.is_equal_scale(source) {
            trace!(samples = self.sample_count(), "resample: identical grid, copying");
            self.values.copy_from_slice(&source.values);
            return Ok(());
        }

        let first = self.start();
        let last = self.last_wavelength();
        if first < source.start() || last > source.last_wavelength() {
            return Err(ColorError::UncoveredRange {
                source_start: source.start(),
                source_end: source.last_wavelength(),
                target_start: first,
                target_end: last,
            });
        }

        for (lambda, value) in self.wavelengths.iter().zip(self.values.iter_mut()) {
            *value = source.sample_bracketed(*lambda);
        }

        trace!(
            source_samples = source.sample_count(),
            target_samples = self.sample_count(),
            "resampled spectrum"
        );
        Ok(())
    }

    /// Resample onto `out.len()` equally spaced wavelengths covering
    /// `[lambda_start, lambda_end)`, writing into `out`.
    pub fn interpolate_onto(&self, out: &mut [f32], lambda_start: f32, lambda_end: f32) -> Result<()> {
        let n = out.len();
        if n == 0 {
            return Ok(());
        }

        let lambda_step = (lambda_end - lambda_start) / n as f32;
        let last_target = lambda_end - lambda_step;
        if lambda_start < self.start() || last_target > self.last_wavelength() {
            return Err(ColorError::UncoveredRange {
                source_start: self.start(),
                source_end: self.last_wavelength(),
                target_start: lambda_start,
                target_end: last_target,
            });
        }

        let same_grid = self.is_uniform()
            && n == self.sample_count()
            && lambda_start == self.start()
            && lambda_end == self.end();
        if same_grid {
            trace!(samples = n, "resample: identical grid, copying");
            out.copy_from_slice(&self.values);
            return Ok(());
        }

        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.sample_bracketed(lambda_start + i as f32 * lambda_step);
        }
        Ok(())
    }

    /// A new uniform spectrum over `[start, end)` at `step`, resampled from
    /// this one.
    pub fn resampled(&self, start: f32, end: f32, step: f32) -> Result<Self> {
        let mut spectrum = Self::filled(start, end, step, 0.0)?;
        spectrum.interpolate_from(self)?;
        Ok(spectrum)
    }
}

impl PartialEq for SampledSpectrum {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_scale(other) && self.values == other.values
    }
}

impl fmt::Display for SampledSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (lambda, value) in self.iter() {
            writeln!(f, "{lambda:.2}: {value:.2}")?;
        }
        write!(f, "}}")
    }
}
