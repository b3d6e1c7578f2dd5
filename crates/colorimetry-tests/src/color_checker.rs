//! Integration tests for the colour checker reference set.
//!
//! Reflectance spectra run through D65, the CIE 1931 observer and sRGB, and
//! are compared with the published 8-bit values.

use colorimetry::{spectrum_to_rgb, Patch, ReflectanceSet, RgbColorSpace, SampledSpectrum, TransferFunction};
use colorimetry_core::RgbU8;

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

/// Flat reflectance over 380..=730 nm at 10 nm, the layout of the
/// BabelColor measurements.
fn flat(value: f32) -> SampledSpectrum {
    SampledSpectrum::filled(380.0, 740.0, 10.0, value).unwrap()
}

/// Constant reflectance whose linear sRGB value equals the decoded
/// reference of a grey patch.
fn grey_reflectance(patch: Patch) -> f32 {
    TransferFunction::Srgb.decode(patch.srgb_reference().g as f32 / 255.0)
}

const GREYS: [Patch; 4] = [Patch::Neutral80, Patch::Neutral65, Patch::Neutral35, Patch::Black20];

fn neutral_set() -> ReflectanceSet {
    let mut set = ReflectanceSet::new();
    for patch in GREYS {
        set.insert(patch, flat(grey_reflectance(patch)));
    }
    set
}

// ── Verification ───────────────────────────────────────────────

#[test]
fn neutral_patches_match_references() {
    init_tracing();
    let set = neutral_set();
    for (patch, spectrum) in set.iter() {
        let rgb = spectrum_to_rgb(spectrum, RgbColorSpace::srgb()).to_unsigned::<u8>();
        assert_eq!(rgb, patch.srgb_reference(), "{}", patch.name());
    }
    assert_eq!(set.len(), GREYS.len());
    assert!(set.verify(RgbColorSpace::srgb()).is_empty());
}

#[test]
fn neutral_patches_are_grey_in_every_d65_space() {
    let set = neutral_set();
    for cs in [RgbColorSpace::rec709(), RgbColorSpace::rec709_linear()] {
        for (_, rgb) in set.to_rgb_u8(cs) {
            let spread = rgb.r.max(rgb.g).max(rgb.b) - rgb.r.min(rgb.g).min(rgb.b);
            assert!(spread <= 1, "{} {rgb}", cs.name());
        }
    }
}

#[test]
fn mismatches_name_the_patch() {
    init_tracing();
    let mut set = neutral_set();
    // darker than the reference patch
    set.insert(Patch::Neutral65, flat(0.25));

    let mismatches = set.verify(RgbColorSpace::srgb());
    assert_eq!(mismatches.len(), 1);
    let m = mismatches[0];
    assert_eq!(m.patch, Patch::Neutral65);
    assert_eq!(m.expected, RgbU8::new(160, 160, 160));
    assert!(m.actual.g < 160);
}

#[test]
fn ordering_follows_the_chart() {
    let mut set = ReflectanceSet::new();
    set.insert(Patch::Black20, flat(grey_reflectance(Patch::Black20)));
    set.insert(Patch::DarkSkin, flat(0.1));
    set.insert(Patch::Cyan, flat(0.2));
    let order: Vec<Patch> = set.iter().map(|(p, _)| p).collect();
    assert_eq!(order, vec![Patch::DarkSkin, Patch::Cyan, Patch::Black20]);
}

// ── Loading ────────────────────────────────────────────────────

#[test]
fn reflectance_set_from_json_verifies() {
    init_tracing();
    let wavelengths: Vec<f32> = (0..36).map(|i| 380.0 + 10.0 * i as f32).collect();
    let entry = |v: f32| {
        serde_json::json!({
            "wavelengths": wavelengths,
            "values": vec![v; wavelengths.len()],
        })
    };
    let json = serde_json::json!({
        "neutral_80": entry(grey_reflectance(Patch::Neutral80)),
        "black_20": entry(grey_reflectance(Patch::Black20)),
    })
    .to_string();

    let set = ReflectanceSet::from_json(&json).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(Patch::Neutral80).unwrap(), &flat(grey_reflectance(Patch::Neutral80)));
    assert!(set.verify(RgbColorSpace::srgb()).is_empty());
}
