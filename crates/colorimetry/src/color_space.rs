//! RGB color spaces and XYZ↔RGB transforms.
//!
//! A space is defined by three primary chromaticities, a white point and a
//! transfer function. The XYZ→RGB matrix is derived once at construction so
//! that RGB (1, 1, 1) maps to the white point at unit luminance; the RGB→XYZ
//! matrix is its inverse.

use std::borrow::Cow;

use colorimetry_core::{xyz_from_chromaticity, Chromaticity, ColorError, Result, RgbF32, Xyz};
use glam::{Mat3, Vec3};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cmf::{CmfId, ColorMatchingFunction};
use crate::illuminant::IlluminantId;
use crate::spectrum::SampledSpectrum;
use crate::transfer::TransferFunction;

/// Chromaticities of the red, green and blue primaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

impl Primaries {
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }

    /// ITU-R BT.709 (shared by sRGB).
    pub const ITU_R_BT709: Self = Self::new(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.30, 0.60),
        Chromaticity::new(0.15, 0.06),
    );
}

/// White point chromaticity paired with its reference illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhitePoint {
    pub xy: Chromaticity,
    pub illuminant: IlluminantId,
}

impl WhitePoint {
    pub const fn new(xy: Chromaticity, illuminant: IlluminantId) -> Self {
        Self { xy, illuminant }
    }

    pub const D50: Self = Self::new(Chromaticity::new(0.3457, 0.3585), IlluminantId::D50);
    pub const D60: Self = Self::new(Chromaticity::new(0.32168, 0.33767), IlluminantId::D60);
    pub const D65: Self = Self::new(Chromaticity::new(0.3127, 0.3290), IlluminantId::D65);

    /// Tristimulus values of the white point at unit luminance.
    pub fn xyz(&self) -> Xyz {
        xyz_from_chromaticity(self.xy, 1.0)
    }
}

/// Everything needed to build an [`RgbColorSpace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpaceDesc {
    pub name: Cow<'static, str>,
    pub primaries: Primaries,
    pub white_point: WhitePoint,
    #[serde(default)]
    pub transfer: TransferFunction,
    #[serde(default)]
    pub cmf: CmfId,
}

impl ColorSpaceDesc {
    pub const REC709: Self = Self {
        name: Cow::Borrowed("ITU-R BT.709"),
        primaries: Primaries::ITU_R_BT709,
        white_point: WhitePoint::D65,
        transfer: TransferFunction::Rec709,
        cmf: CmfId::Cie1931TwoDegree,
    };

    pub const REC709_LINEAR: Self = Self {
        name: Cow::Borrowed("ITU-R BT.709 (linear)"),
        primaries: Primaries::ITU_R_BT709,
        white_point: WhitePoint::D65,
        transfer: TransferFunction::Linear,
        cmf: CmfId::Cie1931TwoDegree,
    };

    pub const SRGB: Self = Self {
        name: Cow::Borrowed("sRGB"),
        primaries: Primaries::ITU_R_BT709,
        white_point: WhitePoint::D65,
        transfer: TransferFunction::Srgb,
        cmf: CmfId::Cie1931TwoDegree,
    };
}

/// An RGB color space with cached XYZ↔RGB matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbColorSpace {
    name: Cow<'static, str>,
    primaries: Primaries,
    white_point: WhitePoint,
    transfer: TransferFunction,
    cmf: CmfId,
    xyz_to_rgb: Mat3,
    rgb_to_xyz: Mat3,
}

static ITU_R_BT709: Lazy<RgbColorSpace> = Lazy::new(|| {
    RgbColorSpace::new(ColorSpaceDesc::REC709).expect("BT.709 primaries must be non-degenerate")
});

static ITU_R_BT709_LINEAR: Lazy<RgbColorSpace> = Lazy::new(|| {
    RgbColorSpace::new(ColorSpaceDesc::REC709_LINEAR).expect("BT.709 primaries must be non-degenerate")
});

static SRGB: Lazy<RgbColorSpace> = Lazy::new(|| {
    RgbColorSpace::new(ColorSpaceDesc::SRGB).expect("sRGB primaries must be non-degenerate")
});

/// Unscaled XYZ→RGB rows are the cofactors of the primaries matrix (one
/// cross product per row); each row is then scaled so the white point maps
/// to 1 with luminance normalised to `y = 1`.
fn derive_xyz_to_rgb(primaries: &Primaries, white: Chromaticity) -> Result<Mat3> {
    if !(white.y > 0.0 && white.is_finite()) {
        return Err(ColorError::InvalidWhitePoint {
            x: white.x,
            y: white.y,
        });
    }

    let with_z = |c: Chromaticity| Vec3::new(c.x, c.y, 1.0 - (c.x + c.y));
    let red = with_z(primaries.red);
    let green = with_z(primaries.green);
    let blue = with_z(primaries.blue);
    let white = with_z(white);

    let r = green.cross(blue);
    let g = blue.cross(red);
    let b = red.cross(green);

    let scale = Vec3::new(r.dot(white), g.dot(white), b.dot(white)) / white.y;
    if !scale.is_finite() || scale.cmpeq(Vec3::ZERO).any() {
        return Err(ColorError::SingularPrimaries);
    }

    Ok(Mat3::from_cols(r / scale.x, g / scale.y, b / scale.z).transpose())
}

impl RgbColorSpace {
    /// Build a color space, deriving its matrices. Fails if the white point
    /// has no luminance or the primaries are collinear.
    pub fn new(desc: ColorSpaceDesc) -> Result<Self> {
        let xyz_to_rgb = derive_xyz_to_rgb(&desc.primaries, desc.white_point.xy)?;

        let determinant = xyz_to_rgb.determinant();
        if !determinant.is_finite() || determinant.abs() <= f32::EPSILON {
            return Err(ColorError::SingularPrimaries);
        }
        let rgb_to_xyz = xyz_to_rgb.inverse();

        debug!(name = %desc.name, determinant, "derived RGB color space matrices");

        Ok(Self {
            name: desc.name,
            primaries: desc.primaries,
            white_point: desc.white_point,
            transfer: desc.transfer,
            cmf: desc.cmf,
            xyz_to_rgb,
            rgb_to_xyz,
        })
    }

    /// ITU-R BT.709 with the BT.709 transfer function.
    pub fn rec709() -> &'static Self {
        &ITU_R_BT709
    }

    /// ITU-R BT.709 primaries with a linear transfer function.
    pub fn rec709_linear() -> &'static Self {
        &ITU_R_BT709_LINEAR
    }

    /// sRGB: BT.709 primaries with the sRGB transfer function.
    pub fn srgb() -> &'static Self {
        &SRGB
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    pub fn white_point(&self) -> &WhitePoint {
        &self.white_point
    }

    pub fn transfer(&self) -> TransferFunction {
        self.transfer
    }

    pub fn cmf_id(&self) -> CmfId {
        self.cmf
    }

    /// The observer this space integrates spectra against.
    pub fn cmf(&self) -> &'static ColorMatchingFunction {
        ColorMatchingFunction::get(self.cmf)
    }

    /// Spectrum of the white point's reference illuminant.
    pub fn illuminant(&self) -> &'static SampledSpectrum {
        self.white_point.illuminant.spectrum()
    }

    pub fn xyz_to_rgb_matrix(&self) -> Mat3 {
        self.xyz_to_rgb
    }

    pub fn rgb_to_xyz_matrix(&self) -> Mat3 {
        self.rgb_to_xyz
    }

    /// XYZ to encoded RGB (matrix, then OETF).
    pub fn to_rgb(&self, xyz: Xyz) -> RgbF32 {
        self.transfer.encode_rgb(self.to_rgb_linear(xyz))
    }

    /// XYZ to linear RGB, skipping the transfer function.
    pub fn to_rgb_linear(&self, xyz: Xyz) -> RgbF32 {
        RgbF32::from(self.xyz_to_rgb * xyz)
    }

    /// Encoded RGB to XYZ (EOTF, then matrix).
    pub fn to_xyz(&self, rgb: RgbF32) -> Xyz {
        self.to_xyz_linear(self.transfer.decode_rgb(rgb))
    }

    /// Linear RGB to XYZ, skipping the transfer function.
    pub fn to_xyz_linear(&self, rgb: RgbF32) -> Xyz {
        self.rgb_to_xyz * Vec3::from(rgb)
    }
}

/// Convert XYZ to RGB in `cs`, optionally leaving the result linear.
pub fn xyz_to_rgb(xyz: Xyz, cs: &RgbColorSpace, ignore_transfer: bool) -> RgbF32 {
    if ignore_transfer {
        cs.to_rgb_linear(xyz)
    } else {
        cs.to_rgb(xyz)
    }
}

/// Convert RGB in `cs` to XYZ, optionally treating the input as linear.
pub fn rgb_to_xyz(rgb: RgbF32, cs: &RgbColorSpace, ignore_transfer: bool) -> Xyz {
    if ignore_transfer {
        cs.to_xyz_linear(rgb)
    } else {
        cs.to_xyz(rgb)
    }
}
