//! Box types for multi-type loads.

use palletizer_core::{BoxTypeId, Dimensions, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box type with a requested number of units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxType {
    /// Caller-assigned identifier, not necessarily contiguous.
    pub id: BoxTypeId,

    /// Extent along the box's own length axis.
    pub length: f64,

    /// Extent along the box's own width axis.
    pub width: f64,

    /// Vertical extent.
    pub height: f64,

    /// Units requested.
    pub units: usize,
}

impl BoxType {
    /// Creates a box type requesting a single unit.
    pub fn new(id: BoxTypeId, length: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            length,
            width,
            height,
            units: 1,
        }
    }

    /// Creates a box type from a dimension triple.
    pub fn from_dimensions(id: BoxTypeId, dimensions: Dimensions) -> Self {
        Self::new(id, dimensions.length, dimensions.width, dimensions.height)
    }

    /// Sets the number of units requested.
    pub fn with_units(mut self, units: usize) -> Self {
        self.units = units;
        self
    }

    /// Returns the dimensions as a triple.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length, self.width, self.height)
    }

    /// Volume of one unit.
    pub fn volume(&self) -> f64 {
        self.dimensions().volume()
    }

    /// Validation errors for this type at 0-based `index` in the input.
    ///
    /// Messages number types from 1.
    pub fn validation_errors(&self, index: usize) -> Vec<Error> {
        let position = index + 1;
        let mut errors: Vec<Error> = self
            .dimensions()
            .invalid_axes()
            .into_iter()
            .map(|axis| Error::InvalidBoxType { position, axis })
            .collect();

        if self.units == 0 {
            errors.push(Error::InvalidUnits(position));
        }

        errors
    }
}
