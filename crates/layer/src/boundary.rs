//! The load space: a pallet plus its height budget and overhang allowance.

use nalgebra::{Point3, Vector3};
use palletizer_core::{is_non_negative, is_positive, Dimensions, Error};

/// The space boxes may occupy on and above a pallet.
///
/// Horizontal coordinates are pallet-centered; the vertical axis starts at the
/// ground, so the first layer rests at `pallet.height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSpace {
    /// Pallet dimensions.
    pallet: Dimensions,

    /// Maximum height of pallet plus load.
    max_total_height: f64,

    /// Millimeters a footprint may project past each pallet edge.
    overhang: f64,
}

impl LoadSpace {
    /// Creates a load space with no overhang.
    pub fn new(pallet: Dimensions, max_total_height: f64) -> Self {
        Self {
            pallet,
            max_total_height,
            overhang: 0.0,
        }
    }

    /// Sets the overhang allowance.
    pub fn with_overhang(mut self, overhang: f64) -> Self {
        self.overhang = overhang;
        self
    }

    /// Returns the pallet dimensions.
    pub fn pallet(&self) -> &Dimensions {
        &self.pallet
    }

    /// Returns the maximum total height.
    pub fn max_total_height(&self) -> f64 {
        self.max_total_height
    }

    /// Returns the overhang allowance.
    pub fn overhang(&self) -> f64 {
        self.overhang
    }

    /// Pallet footprint area.
    pub fn pallet_area(&self) -> f64 {
        self.pallet.footprint_area()
    }

    /// Height above the pallet top, negative when the budget is below it.
    pub fn headroom(&self) -> f64 {
        self.max_total_height - self.pallet.height
    }

    /// Returns true if there is room to stack anything above the pallet.
    pub fn has_headroom(&self) -> bool {
        self.headroom() > 0.0
    }

    /// Height budget for boxes, never negative.
    pub fn available_height(&self) -> f64 {
        self.headroom().max(0.0)
    }

    /// Pallet area times available height.
    pub fn max_load_volume(&self) -> f64 {
        self.pallet_area() * self.available_height()
    }

    /// Errors for pallet axes that are not positive finite numbers.
    pub fn pallet_errors(&self) -> Vec<Error> {
        self.pallet
            .invalid_axes()
            .into_iter()
            .map(Error::InvalidPallet)
            .collect()
    }

    /// Errors for the height budget and overhang fields.
    pub fn budget_errors(&self) -> Vec<Error> {
        let mut errors = Vec::new();
        if !is_positive(self.max_total_height) {
            errors.push(Error::InvalidMaxHeight);
        }
        if !is_non_negative(self.overhang) {
            errors.push(Error::NegativeOverhang);
        }
        errors
    }

    /// Non-fatal budget problems: [`Error::HeightBudget`] when nothing fits
    /// above the pallet.
    pub fn headroom_errors(&self) -> Vec<Error> {
        if self.has_headroom() {
            Vec::new()
        } else {
            vec![Error::HeightBudget]
        }
    }

    /// Corner of the pallet top at minimum length and width.
    pub fn grid_origin(&self) -> Point3<f64> {
        Point3::new(
            -self.pallet.length / 2.0,
            self.pallet.height,
            -self.pallet.width / 2.0,
        )
    }

    /// Center of grid cell (`ix`, `iy`) for a footprint of
    /// `footprint_l` × `footprint_w`, with its bottom `base` above the pallet top.
    pub fn cell_center(
        &self,
        footprint_l: f64,
        footprint_w: f64,
        box_height: f64,
        ix: usize,
        iy: usize,
        base: f64,
    ) -> Point3<f64> {
        let offset = Vector3::new(
            footprint_l / 2.0 + ix as f64 * footprint_l,
            base + box_height / 2.0,
            footprint_w / 2.0 + iy as f64 * footprint_w,
        );
        self.grid_origin() + offset
    }
}

impl Default for LoadSpace {
    /// 1200×1000×150 pallet, 1200 max total height, no overhang.
    fn default() -> Self {
        Self::new(Dimensions::new(1200.0, 1000.0, 150.0), 1200.0)
    }
}
