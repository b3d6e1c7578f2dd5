//! Tristimulus values and chromaticity coordinates.

use glam::{Vec2, Vec3};

/// CIE XYZ tristimulus values.
pub type Xyz = Vec3;

/// CIE xy chromaticity coordinates.
pub type Chromaticity = Vec2;

/// Tristimulus values for chromaticity `xy` at luminance `luminance`.
pub fn xyz_from_chromaticity(xy: Chromaticity, luminance: f32) -> Xyz {
    if xy.y == 0.0 {
        return Xyz::ZERO;
    }
    let scale = luminance / xy.y;
    Xyz::new(xy.x * scale, luminance, (1.0 - xy.x - xy.y) * scale)
}

/// Project tristimulus values onto the xy chromaticity plane.
pub fn chromaticity_of(xyz: Xyz) -> Chromaticity {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        return Chromaticity::ZERO;
    }
    Chromaticity::new(xyz.x / sum, xyz.y / sum)
}
