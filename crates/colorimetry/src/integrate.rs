//! Spectrum → XYZ → RGB integration.
//!
//! Integration is a discrete sum over the samples of the input spectrum
//! that fall inside the overlap of every participating curve: each sample
//! contributes its value times the observer curves evaluated at its own
//! wavelength.

use colorimetry_core::{ColorError, Result, RgbF32, Xyz};
use tracing::warn;

use crate::cmf::ColorMatchingFunction;
use crate::color_space::RgbColorSpace;
use crate::spectrum::SampledSpectrum;

/// Integrates spectra against an observer, optionally weighted by an
/// illuminant.
#[derive(Debug, Clone, Copy)]
pub struct SpectralIntegrator<'a> {
    cmf: &'a ColorMatchingFunction,
    illuminant: Option<&'a SampledSpectrum>,
}

impl<'a> SpectralIntegrator<'a> {
    /// Raw integration against `cmf`, without normalisation.
    pub fn new(cmf: &'a ColorMatchingFunction) -> Self {
        Self {
            cmf,
            illuminant: None,
        }
    }

    /// Relative integration under `illuminant`. The illuminant is evaluated
    /// by interpolation, so it must be uniform.
    pub fn under(cmf: &'a ColorMatchingFunction, illuminant: &'a SampledSpectrum) -> Result<Self> {
        if !illuminant.is_uniform() {
            return Err(ColorError::NonUniform);
        }
        Ok(Self {
            cmf,
            illuminant: Some(illuminant),
        })
    }

    pub fn cmf(&self) -> &'a ColorMatchingFunction {
        self.cmf
    }

    pub fn illuminant(&self) -> Option<&'a SampledSpectrum> {
        self.illuminant
    }

    /// Wavelength interval `[start, end)` shared by `spectrum`, the observer
    /// and the illuminant, if any.
    pub fn overlap(&self, spectrum: &SampledSpectrum) -> (f32, f32) {
        let mut start = spectrum.start().max(self.cmf.start());
        let mut end = spectrum.end().min(self.cmf.end());
        if let Some(illuminant) = self.illuminant {
            start = start.max(illuminant.start());
            end = end.min(illuminant.end());
        }
        (start, end)
    }

    /// Tristimulus values of `spectrum`. Under an illuminant the result is
    /// divided by `Σ ȳ(λ)·I(λ)` over the same samples, so a perfect
    /// reflector has `Y = 1`.
    pub fn integrate(&self, spectrum: &SampledSpectrum) -> Xyz {
        let (start, end) = self.overlap(spectrum);
        let wavelengths = spectrum.wavelengths();
        let first = wavelengths.partition_point(|&w| w < start);
        let last = wavelengths.partition_point(|&w| w < end);

        if first >= last {
            warn!(
                spectrum_start = spectrum.start(),
                spectrum_end = spectrum.end(),
                overlap_start = start,
                overlap_end = end,
                "no samples inside the integration range"
            );
            return Xyz::ZERO;
        }

        let samples = wavelengths[first..last]
            .iter()
            .zip(&spectrum.values()[first..last]);

        match self.illuminant {
            None => samples.fold(Xyz::ZERO, |acc, (&lambda, &value)| {
                acc + value * observe(self.cmf, lambda)
            }),
            Some(illuminant) => {
                let mut xyz = Xyz::ZERO;
                let mut norm = 0.0;
                for (&lambda, &value) in samples {
                    let weighted = illuminant.value_at(lambda) * observe(self.cmf, lambda);
                    xyz += value * weighted;
                    norm += weighted.y;
                }
                if norm == 0.0 {
                    warn!(overlap_start = start, overlap_end = end, "illuminant has no luminance in range");
                    return Xyz::ZERO;
                }
                xyz / norm
            }
        }
    }

    /// Contribution of a single `(lambda, value)` sample. Under an
    /// illuminant it is normalised by `ȳ(λ)·I(λ)` at that wavelength.
    pub fn integrate_sample(&self, lambda: f32, value: f32) -> Xyz {
        let bar = observe(self.cmf, lambda);
        match self.illuminant {
            None => value * bar,
            Some(illuminant) => {
                let weighted = illuminant.value_at(lambda) * bar;
                if weighted.y == 0.0 {
                    return Xyz::ZERO;
                }
                value * weighted / weighted.y
            }
        }
    }
}

#[inline]
fn observe(cmf: &ColorMatchingFunction, lambda: f32) -> Xyz {
    Xyz::new(
        cmf.x_bar.value_at(lambda),
        cmf.y_bar.value_at(lambda),
        cmf.z_bar.value_at(lambda),
    )
}

/// Unnormalised tristimulus integral of `spectrum` against `cmf`.
pub fn spectrum_to_xyz(spectrum: &SampledSpectrum, cmf: &ColorMatchingFunction) -> Xyz {
    SpectralIntegrator::new(cmf).integrate(spectrum)
}

/// Relative tristimulus values of `spectrum` under `illuminant`.
///
/// Fails with [`ColorError::NonUniform`] if `illuminant` is irregular.
pub fn spectrum_to_xyz_under(
    spectrum: &SampledSpectrum,
    cmf: &ColorMatchingFunction,
    illuminant: &SampledSpectrum,
) -> Result<Xyz> {
    Ok(SpectralIntegrator::under(cmf, illuminant)?.integrate(spectrum))
}

/// XYZ contribution of one sample.
pub fn sample_to_xyz(lambda: f32, value: f32, cmf: &ColorMatchingFunction) -> Xyz {
    SpectralIntegrator::new(cmf).integrate_sample(lambda, value)
}

/// XYZ contribution of one sample under `illuminant`.
///
/// Fails with [`ColorError::NonUniform`] if `illuminant` is irregular.
pub fn sample_to_xyz_under(
    lambda: f32,
    value: f32,
    cmf: &ColorMatchingFunction,
    illuminant: &SampledSpectrum,
) -> Result<Xyz> {
    Ok(SpectralIntegrator::under(cmf, illuminant)?.integrate_sample(lambda, value))
}

/// Encoded RGB of a reflectance spectrum seen under the white point's
/// illuminant of `cs`, with the observer of `cs`.
pub fn spectrum_to_rgb(spectrum: &SampledSpectrum, cs: &RgbColorSpace) -> RgbF32 {
    // registered illuminants are uniform
    let integrator = SpectralIntegrator {
        cmf: cs.cmf(),
        illuminant: Some(cs.illuminant()),
    };
    cs.to_rgb(integrator.integrate(spectrum))
}
