//! Integration tests for spectra, observers and illuminants.
//!
//! Exercises the reference tables through resampling and integration.

use colorimetry::{
    daylight, sample_to_xyz, spectrum_to_xyz, spectrum_to_xyz_under, CmfId, ColorMatchingFunction,
    IlluminantId, RgbColorSpace, SampledSpectrum, SpectralIntegrator,
};
use colorimetry_core::{chromaticity_of, Chromaticity, Xyz};

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

fn observer() -> &'static ColorMatchingFunction {
    CmfId::Cie1931TwoDegree.cmf()
}

fn assert_xy_near(actual: Chromaticity, expected: Chromaticity, tol: f32) {
    assert!(
        (actual - expected).abs().max_element() < tol,
        "chromaticity {actual} not within {tol} of {expected}"
    );
}

// ── Emission spectra ───────────────────────────────────────────

#[test]
fn d65_emission_is_achromatic_in_srgb() {
    init_tracing();
    let srgb = RgbColorSpace::srgb();
    let xyz = spectrum_to_xyz(IlluminantId::D65.spectrum(), srgb.cmf());

    let rgb = srgb.to_rgb_linear(xyz);
    let mean = (rgb.r + rgb.g + rgb.b) / 3.0;
    for channel in rgb.to_array() {
        assert!((channel - mean).abs() / mean < 0.02, "{rgb}");
    }

    // normalised to unit luminance the white lands on (1, 1, 1)
    let white = srgb.to_rgb(xyz / xyz.y);
    assert!((white.min_component() - 1.0).abs() < 2e-3, "{white}");
    assert!((white.max_component() - 1.0).abs() < 2e-3, "{white}");
}

#[test]
fn illuminant_chromaticities() {
    init_tracing();
    let xy = |id: IlluminantId| chromaticity_of(spectrum_to_xyz(id.spectrum(), observer()));

    assert_xy_near(xy(IlluminantId::D65), Chromaticity::new(0.3127, 0.3290), 1e-3);
    assert_xy_near(xy(IlluminantId::D50), Chromaticity::new(0.3457, 0.3586), 1e-3);
    assert_xy_near(xy(IlluminantId::D60), Chromaticity::new(0.3217, 0.3377), 1e-3);
    assert_xy_near(xy(IlluminantId::E), Chromaticity::new(1.0 / 3.0, 1.0 / 3.0), 1e-4);
}

#[test]
fn daylight_chromaticity_tracks_temperature() {
    let xs: Vec<f32> = [4000.0, 5000.0, 6500.0, 9000.0, 20000.0]
        .into_iter()
        .map(|t| chromaticity_of(spectrum_to_xyz(&daylight(t).unwrap(), observer())).x)
        .collect();
    assert!(xs.windows(2).all(|w| w[0] > w[1]), "{xs:?}");
}

// ── Resampling & integration ───────────────────────────────────

#[test]
fn resampling_keeps_chromaticity() {
    init_tracing();
    let d65 = IlluminantId::D65.spectrum();
    let coarse = d65.resampled(380.0, 790.0, 10.0).unwrap();
    assert_eq!(coarse.sample_count(), 41);

    let fine = chromaticity_of(spectrum_to_xyz(d65, observer()));
    let coarse = chromaticity_of(spectrum_to_xyz(&coarse, observer()));
    assert_xy_near(coarse, fine, 5e-4);
}

#[test]
fn copy_onto_identical_grid_integrates_identically() {
    let d65 = IlluminantId::D65.spectrum();
    let mut copy = SampledSpectrum::filled(380.0, 785.0, 5.0, 0.0).unwrap();
    copy.interpolate_from(d65).unwrap();
    assert_eq!(&copy, d65);
    assert_eq!(spectrum_to_xyz(&copy, observer()), spectrum_to_xyz(d65, observer()));
}

#[test]
fn streaming_samples_match_batch_integration() {
    let spectrum = SampledSpectrum::filled(400.0, 700.0, 10.0, 0.25).unwrap();
    let streamed = spectrum
        .iter()
        .fold(Xyz::ZERO, |acc, (lambda, value)| acc + sample_to_xyz(lambda, value, observer()));
    let batch = spectrum_to_xyz(&spectrum, observer());
    assert!((streamed - batch).abs().max_element() < 1e-5);
}

#[test]
fn reflectance_under_each_illuminant() {
    init_tracing();
    let grey = SampledSpectrum::filled(380.0, 780.0, 5.0, 0.18).unwrap();
    for id in IlluminantId::ALL {
        let integrator = SpectralIntegrator::under(observer(), id.spectrum()).unwrap();
        let xyz = integrator.integrate(&grey);
        assert!((xyz.y - 0.18).abs() < 1e-5, "{id:?}");

        let free = spectrum_to_xyz_under(&grey, observer(), id.spectrum()).unwrap();
        assert_eq!(xyz, free);
    }
}

#[test]
fn spectra_from_json() {
    let json = r#"{ "wavelengths": [400.0, 410.0, 420.0], "values": [0.1, 0.2, 0.3] }"#;
    let spectrum: SampledSpectrum = serde_json::from_str(json).unwrap();
    assert!(spectrum.is_uniform());
    assert_eq!(spectrum.step(), 10.0);
    assert!((spectrum.value_at(415.0) - 0.25).abs() < 1e-6);

    let back = serde_json::to_string(&spectrum).unwrap();
    let again: SampledSpectrum = serde_json::from_str(&back).unwrap();
    assert_eq!(again, spectrum);
}
