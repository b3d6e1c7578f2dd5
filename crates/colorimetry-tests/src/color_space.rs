//! Integration tests for RGB color spaces.
//!
//! Exercises color-space construction from descriptors together with the
//! observer and illuminant registries.

use colorimetry::{
    rgb_to_xyz, spectrum_to_rgb, spectrum_to_xyz, xyz_to_rgb, CmfId, ColorSpaceDesc, IlluminantId, Primaries,
    RgbColorSpace, SampledSpectrum, TransferFunction, WhitePoint,
};
use colorimetry_core::{chromaticity_of, Chromaticity, ColorError, RgbF32, RgbU8};
use glam::Vec3;

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

fn p3_d65() -> RgbColorSpace {
    RgbColorSpace::new(ColorSpaceDesc {
        name: "Display P3".into(),
        primaries: Primaries::new(
            Chromaticity::new(0.680, 0.320),
            Chromaticity::new(0.265, 0.690),
            Chromaticity::new(0.150, 0.060),
        ),
        white_point: WhitePoint::D65,
        transfer: TransferFunction::Srgb,
        cmf: CmfId::Cie1931TwoDegree,
    })
    .unwrap()
}

fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() < tol
}

// ── White point invariant ──────────────────────────────────────

#[test]
fn white_maps_to_white_point_in_every_space() {
    init_tracing();
    let p3 = p3_d65();
    for cs in [RgbColorSpace::rec709(), RgbColorSpace::rec709_linear(), RgbColorSpace::srgb(), &p3] {
        let xyz = rgb_to_xyz(RgbF32::WHITE, cs, true);
        assert!(close(xyz, cs.white_point().xyz(), 1e-5), "{}: {xyz}", cs.name());
        assert!((xyz.y - 1.0).abs() < 1e-6);
    }
}

#[test]
fn d65_white_point_matches_tabulated_d65() {
    let d65 = IlluminantId::D65.spectrum();
    let xy = chromaticity_of(spectrum_to_xyz(d65, RgbColorSpace::srgb().cmf()));
    assert!((xy - WhitePoint::D65.xy).abs().max_element() < 5e-5, "{xy}");
    // closer to the BT.709 value than to x = 0.3128
    assert!((xy.x - 0.3127).abs() < (xy.x - 0.3128).abs());
}

#[test]
fn srgb_to_p3_keeps_white() {
    let p3 = p3_d65();
    let srgb = RgbColorSpace::srgb();
    let xyz = rgb_to_xyz(RgbF32::WHITE, srgb, false);
    let rgb = xyz_to_rgb(xyz, &p3, false);
    assert!(close(rgb.into(), Vec3::ONE, 1e-4), "{rgb}");
}

#[test]
fn srgb_red_is_inside_p3() {
    let p3 = p3_d65();
    let xyz = rgb_to_xyz(RgbF32::new(1.0, 0.0, 0.0), RgbColorSpace::srgb(), false);
    let rgb = xyz_to_rgb(xyz, &p3, true);
    assert!(rgb.is_positive_real());
    assert!(rgb.r < 1.0 && rgb.g > 0.0);
}

// ── Descriptors ────────────────────────────────────────────────

#[test]
fn descriptor_round_trips_through_json() {
    init_tracing();
    let json = r#"{
        "name": "Rec. 709 linear",
        "primaries": { "red": [0.64, 0.33], "green": [0.30, 0.60], "blue": [0.15, 0.06] },
        "white_point": { "xy": [0.3127, 0.3290], "illuminant": "D65" }
    }"#;
    let desc: ColorSpaceDesc = serde_json::from_str(json).unwrap();
    assert_eq!(desc.transfer, TransferFunction::Linear);
    assert_eq!(desc.cmf, CmfId::Cie1931TwoDegree);

    let cs = RgbColorSpace::new(desc).unwrap();
    assert!(cs
        .xyz_to_rgb_matrix()
        .abs_diff_eq(RgbColorSpace::rec709_linear().xyz_to_rgb_matrix(), 1e-5));
}

#[test]
fn degenerate_descriptors_are_rejected() {
    let collinear = ColorSpaceDesc {
        primaries: Primaries::new(
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.4, 0.4),
            Chromaticity::new(0.6, 0.6),
        ),
        ..ColorSpaceDesc::REC709
    };
    assert_eq!(RgbColorSpace::new(collinear).unwrap_err(), ColorError::SingularPrimaries);

    let dark_white = ColorSpaceDesc {
        white_point: WhitePoint::new(Chromaticity::new(0.3, 0.0), IlluminantId::E),
        ..ColorSpaceDesc::REC709
    };
    assert!(matches!(
        RgbColorSpace::new(dark_white),
        Err(ColorError::InvalidWhitePoint { .. })
    ));
}

// ── Spectra into RGB ───────────────────────────────────────────

#[test]
fn perfect_reflector_is_display_white() {
    init_tracing();
    let white = SampledSpectrum::filled(380.0, 785.0, 5.0, 1.0).unwrap();
    let rgb = spectrum_to_rgb(&white, RgbColorSpace::srgb());
    assert!(close(rgb.into(), Vec3::ONE, 1e-3), "{rgb}");
    assert_eq!(rgb.to_unsigned::<u8>(), RgbU8::new(255, 255, 255));
}

#[test]
fn d60_space_uses_d60_illuminant() {
    let aces_like = RgbColorSpace::new(ColorSpaceDesc {
        name: "AP1 D60".into(),
        primaries: Primaries::new(
            Chromaticity::new(0.713, 0.293),
            Chromaticity::new(0.165, 0.830),
            Chromaticity::new(0.128, 0.044),
        ),
        white_point: WhitePoint::D60,
        transfer: TransferFunction::Linear,
        cmf: CmfId::Cie1931TwoDegree,
    })
    .unwrap();
    assert!(std::ptr::eq(aces_like.illuminant(), IlluminantId::D60.spectrum()));

    // a perfect reflector under the space's own illuminant is close to its
    // white; the synthesised D60 is slightly off the nominal chromaticity
    let white = SampledSpectrum::filled(380.0, 780.0, 10.0, 1.0).unwrap();
    let rgb = spectrum_to_rgb(&white, &aces_like);
    assert!(close(rgb.into(), Vec3::ONE, 5e-3), "{rgb}");
}
