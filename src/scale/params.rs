//! The four user-facing inputs of the calculator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FluidError;

/// Sizes (rem) at the two viewport width breakpoints (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidScaleParameters {
    /// Size at the lower breakpoint, in rem
    pub min_size: f64,
    /// Lower viewport width breakpoint, in px
    pub min_width: f64,
    /// Size at the upper breakpoint, in rem
    pub max_size: f64,
    /// Upper viewport width breakpoint, in px
    pub max_width: f64,
}

impl Default for FluidScaleParameters {
    fn default() -> Self {
        Self {
            min_size: 1.5,
            min_width: 700.0,
            max_size: 3.0,
            max_width: 1000.0,
        }
    }
}

impl FluidScaleParameters {
    pub fn new(min_size: f64, min_width: f64, max_size: f64, max_width: f64) -> Self {
        Self {
            min_size,
            min_width,
            max_size,
            max_width,
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::MinSize => self.min_size,
            Field::MinWidth => self.min_width,
            Field::MaxSize => self.max_size,
            Field::MaxWidth => self.max_width,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::MinSize => &mut self.min_size,
            Field::MinWidth => &mut self.min_width,
            Field::MaxSize => &mut self.max_size,
            Field::MaxWidth => &mut self.max_width,
        };
        *slot = value;
    }
}

/// One of the four input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MinSize,
    MinWidth,
    MaxSize,
    MaxWidth,
}

impl Field {
    /// All fields, in on-screen order.
    pub const ALL: [Field; 4] = [
        Field::MinSize,
        Field::MinWidth,
        Field::MaxSize,
        Field::MaxWidth,
    ];

    /// Name used in the JS API and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::MinSize => "minSize",
            Field::MinWidth => "minWidth",
            Field::MaxSize => "maxSize",
            Field::MaxWidth => "maxWidth",
        }
    }

    /// CSS unit the field is expressed in.
    pub fn unit(self) -> &'static str {
        match self {
            Field::MinSize | Field::MaxSize => "rem",
            Field::MinWidth | Field::MaxWidth => "px",
        }
    }
}

impl FromStr for Field {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minSize" | "min_size" | "min-size" => Ok(Field::MinSize),
            "minWidth" | "min_width" | "min-width" => Ok(Field::MinWidth),
            "maxSize" | "max_size" | "max-size" => Ok(Field::MaxSize),
            "maxWidth" | "max_width" | "max-width" => Ok(Field::MaxWidth),
            other => Err(FluidError::UnknownField(other.to_string())),
        }
    }
}
