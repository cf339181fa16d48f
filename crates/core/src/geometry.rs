//! Core geometry types.
//!
//! All lengths are millimeters. `length` and `width` span the footprint,
//! `height` is the vertical stacking unit.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier assigned by the caller to a box type.
pub type BoxTypeId = u32;

/// One of the three box/pallet axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Along the pallet length.
    Length,
    /// Along the pallet width.
    Width,
    /// Vertical.
    Height,
}

impl Axis {
    /// All axes in (length, width, height) order.
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
        };
        f.write_str(name)
    }
}

/// A (length, width, height) triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along the pallet length axis.
    pub length: f64,
    /// Extent along the pallet width axis.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Dimensions {
    /// Creates a new dimension triple.
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Returns the value along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Footprint area (length × width).
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Volume (length × width × height).
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the axes whose value is not a positive finite number.
    pub fn invalid_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| !is_positive(self.get(axis)))
            .collect()
    }

    /// Returns true if every axis is a positive finite number.
    pub fn is_valid(&self) -> bool {
        self.invalid_axes().is_empty()
    }

    /// Footprint (length, width) as laid down in `orientation`.
    pub fn footprint(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::LxW => (self.length, self.width),
            Orientation::WxL => (self.width, self.length),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// How a box footprint is laid on the pallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Box length aligned with pallet length.
    #[default]
    LxW,
    /// Box width aligned with pallet length (rotated 90° about the vertical axis).
    WxL,
}

impl Orientation {
    /// Returns the tag as written in reports (`"LxW"` / `"WxL"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::LxW => "LxW",
            Orientation::WxL => "WxL",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finite and strictly greater than zero.
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Finite and not negative.
pub fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
