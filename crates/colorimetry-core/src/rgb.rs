//! RGB triples with float or unsigned integer channels.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use half::f16;
use serde::{Deserialize, Serialize};

use crate::math;

/// An RGB triple. Float channels hold linear or encoded signal values,
/// unsigned channels hold display-encoded integer code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

pub type RgbF16 = Rgb<f16>;
pub type RgbF32 = Rgb<f32>;
pub type RgbF64 = Rgb<f64>;
pub type RgbU8 = Rgb<u8>;
pub type RgbU16 = Rgb<u16>;
pub type RgbU32 = Rgb<u32>;

// SAFETY: `Rgb<T>` is `repr(C)` with three fields of the same type, so it has
// no padding and every bit pattern valid for `T` is valid for the triple.
#[allow(unsafe_code)]
unsafe impl<T: Zeroable> Zeroable for Rgb<T> {}
#[allow(unsafe_code)]
unsafe impl<T: Pod> Pod for Rgb<T> {}

impl<T: Copy> Rgb<T> {
    /// Create a new triple from its channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Create a triple with every channel set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Rgb<U> {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }
}

impl<T> Index<usize> for Rgb<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        match idx {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Rgb index out of bounds: {idx}"),
        }
    }
}

impl<T> IndexMut<usize> for Rgb<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        match idx {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Rgb index out of bounds: {idx}"),
        }
    }
}

macro_rules! componentwise_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident) => {
        impl<T: Copy + $op<Output = T>> $op for Rgb<T> {
            type Output = Self;

            #[inline]
            fn $fn(self, o: Self) -> Self {
                Self::new(self.r.$fn(o.r), self.g.$fn(o.g), self.b.$fn(o.b))
            }
        }

        impl<T: Copy + $op_assign> $op_assign for Rgb<T> {
            #[inline]
            fn $fn_assign(&mut self, o: Self) {
                self.r.$fn_assign(o.r);
                self.g.$fn_assign(o.g);
                self.b.$fn_assign(o.b);
            }
        }
    };
}

componentwise_op!(Add, add, AddAssign, add_assign);
componentwise_op!(Sub, sub, SubAssign, sub_assign);
componentwise_op!(Mul, mul, MulAssign, mul_assign);
componentwise_op!(Div, div, DivAssign, div_assign);

macro_rules! float_channel {
    ($t:ty) => {
        impl Mul<$t> for Rgb<$t> {
            type Output = Self;

            #[inline]
            fn mul(self, s: $t) -> Self {
                Self::new(self.r * s, self.g * s, self.b * s)
            }
        }

        impl Mul<Rgb<$t>> for $t {
            type Output = Rgb<$t>;

            #[inline]
            fn mul(self, c: Rgb<$t>) -> Rgb<$t> {
                c * self
            }
        }

        impl Div<$t> for Rgb<$t> {
            type Output = Self;

            #[inline]
            fn div(self, s: $t) -> Self {
                Self::new(self.r / s, self.g / s, self.b / s)
            }
        }

        impl fmt::Display for Rgb<$t> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}, {}, {})", self.r, self.g, self.b)
            }
        }
    };
}

float_channel!(f16);
float_channel!(f32);
float_channel!(f64);

impl From<RgbF32> for RgbF64 {
    fn from(c: RgbF32) -> Self {
        c.map(f64::from)
    }
}

impl From<RgbF32> for RgbF16 {
    fn from(c: RgbF32) -> Self {
        c.map(f16::from_f32)
    }
}

impl From<RgbF16> for RgbF32 {
    fn from(c: RgbF16) -> Self {
        c.map(f16::to_f32)
    }
}

impl From<Vec3> for RgbF32 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<RgbF32> for Vec3 {
    fn from(c: RgbF32) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl RgbF32 {
    pub const BLACK: Self = Self::splat(0.0);
    pub const WHITE: Self = Self::splat(1.0);

    /// Raise every channel to the power `e`.
    pub fn pow(self, e: f32) -> Self {
        self.map(|c| c.powf(e))
    }

    /// Clamp every channel to the matching channel range of `min`..`max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            math::clamp(self.r, min.r, max.r),
            math::clamp(self.g, min.g, max.g),
            math::clamp(self.b, min.b, max.b),
        )
    }

    /// Linear interpolation between two triples.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }

    /// Componentwise maximum against a scalar.
    pub fn max_scalar(self, f: f32) -> Self {
        self.map(|c| c.max(f))
    }

    /// Smallest channel.
    pub fn min_component(self) -> f32 {
        self.r.min(self.g.min(self.b))
    }

    /// Largest channel.
    pub fn max_component(self) -> f32 {
        self.r.max(self.g.max(self.b))
    }

    pub fn is_real(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn is_positive(self) -> bool {
        self.max_component() > -1e-7
    }

    pub fn is_negative(self) -> bool {
        !self.is_positive()
    }

    pub fn is_positive_real(self) -> bool {
        self.is_real() && self.is_positive()
    }

    /// Quantise to an unsigned channel type: scale by the channel maximum,
    /// round, and clamp into the representable range.
    pub fn to_unsigned<T: UnsignedChannel>(self) -> Rgb<T> {
        self.map(T::from_unit)
    }
}

impl RgbF16 {
    pub const BLACK: Self = Self::splat(f16::ZERO);
    pub const WHITE: Self = Self::splat(f16::ONE);

    /// Quantise through `f32`, as [`RgbF32::to_unsigned`].
    pub fn to_unsigned<T: UnsignedChannel>(self) -> Rgb<T> {
        RgbF32::from(self).to_unsigned()
    }
}

/// Unsigned integer channel types usable as display code values.
pub trait UnsignedChannel: Copy {
    /// Largest code value, as `f32`.
    const MAX_F32: f32;

    /// Convert a normalised value in `[0, 1]` to the nearest code value.
    fn from_unit(v: f32) -> Self;

    /// Convert a code value back to `[0, 1]`.
    fn to_unit(self) -> f32;
}

macro_rules! unsigned_channel {
    ($t:ty) => {
        impl UnsignedChannel for $t {
            const MAX_F32: f32 = <$t>::MAX as f32;

            #[inline]
            fn from_unit(v: f32) -> Self {
                math::clamp((v * Self::MAX_F32).round(), 0.0, Self::MAX_F32) as $t
            }

            #[inline]
            fn to_unit(self) -> f32 {
                self as f32 / Self::MAX_F32
            }
        }

        impl fmt::Display for Rgb<$t> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({:>3}, {:>3}, {:>3})", self.r, self.g, self.b)
            }
        }
    };
}

unsigned_channel!(u8);
unsigned_channel!(u16);
unsigned_channel!(u32);

impl<U: UnsignedChannel> Rgb<U> {
    /// Re-quantise to a wider or narrower unsigned channel type.
    pub fn rescale<T: UnsignedChannel>(self) -> Rgb<T> {
        self.map(|c| T::from_unit(c.to_unit()))
    }

    /// Normalise code values to `[0, 1]` floats.
    pub fn to_f32(self) -> RgbF32 {
        self.map(UnsignedChannel::to_unit)
    }
}
