//! Fluid scale model: the four user inputs and the two coefficients derived
//! from them.
//!
//! This module handles:
//! - Holding the min/max size and viewport width breakpoints
//! - Deriving the `vw` and `rem` coefficients of the interpolating line
//! - Coercing free-form text input into numbers

mod coefficients;
mod input;
mod params;

pub use coefficients::{derive, round1, FluidScaleCoefficients, VW_SCALE};
pub use input::parse_lenient;
pub use params::{Field, FluidScaleParameters};
