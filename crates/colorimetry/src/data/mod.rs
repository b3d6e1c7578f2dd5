//! Tabulated reference data.
//!
//! Plain arrays only; the registries in [`crate::cmf`] and
//! [`crate::illuminant`] wrap them as spectra.

pub mod cie1931;
pub mod d65;
pub mod daylight;
