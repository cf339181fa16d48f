//! Solver requests.
//!
//! Inputs are plain value structs. Numbers are expected to be parsed already;
//! validation accumulates every violated condition rather than stopping at the
//! first one.

use palletizer_core::{Dimensions, Error};

use crate::boundary::LoadSpace;
use crate::geometry::BoxType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default pallet: 1200×1000 mm footprint, 150 mm tall.
pub const DEFAULT_PALLET: Dimensions = Dimensions::new(1200.0, 1000.0, 150.0);

/// Default master box.
pub const DEFAULT_BOX: Dimensions = Dimensions::new(500.0, 350.0, 450.0);

/// Default maximum height of pallet plus load.
pub const DEFAULT_MAX_TOTAL_HEIGHT: f64 = 1200.0;

/// Request for the single-box solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SingleBoxInput {
    /// Pallet dimensions.
    pub pallet: Dimensions,

    /// The box to load.
    #[cfg_attr(feature = "serde", serde(rename = "box"))]
    pub box_dims: Dimensions,

    /// Maximum height of pallet plus boxes.
    pub max_total_height: f64,

    /// Whether the `WxL` orientation is evaluated.
    pub allow_rotation: bool,

    /// Millimeters a footprint may project past each pallet edge.
    pub overhang: f64,
}

impl SingleBoxInput {
    /// Creates a request with rotation allowed and no overhang.
    pub fn new(pallet: Dimensions, box_dims: Dimensions, max_total_height: f64) -> Self {
        Self {
            pallet,
            box_dims,
            max_total_height,
            allow_rotation: true,
            overhang: 0.0,
        }
    }

    /// Sets whether rotation is allowed.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Sets the overhang allowance.
    pub fn with_overhang(mut self, overhang: f64) -> Self {
        self.overhang = overhang;
        self
    }

    /// The load space described by this request.
    pub fn load_space(&self) -> LoadSpace {
        LoadSpace::new(self.pallet, self.max_total_height).with_overhang(self.overhang)
    }

    /// Structural validation: pallet, box, height budget, overhang.
    pub fn validation_errors(&self) -> Vec<Error> {
        let space = self.load_space();
        let mut errors = space.pallet_errors();
        errors.extend(
            self.box_dims
                .invalid_axes()
                .into_iter()
                .map(Error::InvalidBox),
        );
        errors.extend(space.budget_errors());
        errors
    }
}

impl Default for SingleBoxInput {
    fn default() -> Self {
        Self::new(DEFAULT_PALLET, DEFAULT_BOX, DEFAULT_MAX_TOTAL_HEIGHT)
    }
}

/// Request for the multi-type allocator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MultiTypeInput {
    /// Pallet dimensions.
    pub pallet: Dimensions,

    /// Maximum height of pallet plus boxes, shared by all types.
    pub max_total_height: f64,

    /// Whether the `WxL` orientation is evaluated, shared by all types.
    pub allow_rotation: bool,

    /// Overhang allowance, shared by all types.
    pub overhang: f64,

    /// Box types in priority order. Omitted types are an error, not the defaults.
    #[cfg_attr(feature = "serde", serde(default))]
    pub box_types: Vec<BoxType>,
}

impl MultiTypeInput {
    /// Creates a request with rotation allowed, no overhang and no types.
    pub fn new(pallet: Dimensions, max_total_height: f64) -> Self {
        Self {
            pallet,
            max_total_height,
            allow_rotation: true,
            overhang: 0.0,
            box_types: Vec::new(),
        }
    }

    /// Sets whether rotation is allowed.
    pub fn with_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    /// Sets the overhang allowance.
    pub fn with_overhang(mut self, overhang: f64) -> Self {
        self.overhang = overhang;
        self
    }

    /// Appends a box type.
    pub fn with_box_type(mut self, box_type: BoxType) -> Self {
        self.box_types.push(box_type);
        self
    }

    /// The load space described by this request.
    pub fn load_space(&self) -> LoadSpace {
        LoadSpace::new(self.pallet, self.max_total_height).with_overhang(self.overhang)
    }

    /// Structural validation: pallet, height budget, overhang, then each type.
    pub fn validation_errors(&self) -> Vec<Error> {
        let space = self.load_space();
        let mut errors = space.pallet_errors();
        errors.extend(space.budget_errors());

        if self.box_types.is_empty() {
            errors.push(Error::NoBoxTypes);
        }

        for (index, box_type) in self.box_types.iter().enumerate() {
            errors.extend(box_type.validation_errors(index));
        }

        errors
    }
}

impl Default for MultiTypeInput {
    /// Two types of the default box, 8 and 12 units.
    fn default() -> Self {
        Self::new(DEFAULT_PALLET, DEFAULT_MAX_TOTAL_HEIGHT)
            .with_box_type(BoxType::from_dimensions(1, DEFAULT_BOX).with_units(8))
            .with_box_type(BoxType::from_dimensions(2, DEFAULT_BOX).with_units(12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletizer_core::Axis;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SingleBoxInput::default().validation_errors().is_empty());
        assert!(MultiTypeInput::default().validation_errors().is_empty());
        assert_eq!(MultiTypeInput::default().box_types.len(), 2);
    }

    #[test]
    fn test_single_errors_accumulate() {
        let input = SingleBoxInput::new(
            Dimensions::new(1200.0, 1000.0, 0.0),
            Dimensions::new(-500.0, 350.0, 450.0),
            1200.0,
        )
        .with_overhang(-1.0);

        assert_eq!(
            input.validation_errors(),
            vec![
                Error::InvalidPallet(Axis::Height),
                Error::InvalidBox(Axis::Length),
                Error::NegativeOverhang,
            ]
        );
    }

    #[test]
    fn test_multi_errors_accumulate() {
        let input = MultiTypeInput::new(DEFAULT_PALLET, f64::NAN)
            .with_box_type(BoxType::new(1, 0.0, 400.0, 200.0).with_units(0));

        assert_eq!(
            input.validation_errors(),
            vec![
                Error::InvalidMaxHeight,
                Error::InvalidBoxType {
                    position: 1,
                    axis: Axis::Length
                },
                Error::InvalidUnits(1),
            ]
        );
    }

    #[test]
    fn test_multi_requires_types() {
        let input = MultiTypeInput::new(DEFAULT_PALLET, 1200.0);
        assert_eq!(input.validation_errors(), vec![Error::NoBoxTypes]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let input: SingleBoxInput = serde_json::from_str(
            r#"{"box":{"length":600,"width":400,"height":200},"maxTotalHeight":900,"allowRotation":false}"#,
        )
        .unwrap();
        assert_eq!(input.pallet, DEFAULT_PALLET);
        assert_eq!(input.box_dims, Dimensions::new(600.0, 400.0, 200.0));
        assert!(!input.allow_rotation);

        let multi: MultiTypeInput = serde_json::from_str(r#"{"maxTotalHeight":900}"#).unwrap();
        assert!(multi.box_types.is_empty());

        let fractional = serde_json::from_str::<MultiTypeInput>(
            r#"{"boxTypes":[{"id":1,"length":1,"width":1,"height":1,"units":2.5}]}"#,
        );
        assert!(fractional.is_err());
    }

    #[test]
    fn test_height_budget_is_not_structural() {
        let input = SingleBoxInput::default();
        let low = SingleBoxInput {
            max_total_height: 100.0,
            ..input
        };
        assert!(low.validation_errors().is_empty());
    }
}
