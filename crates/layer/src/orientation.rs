//! Orientation evaluation and selection.
//!
//! A footprint is laid on the pallet as a uniform `nx` × `ny` grid. Only the
//! two upright orientations are considered: `LxW` and, when rotation is
//! allowed, `WxL`.

use palletizer_core::{is_non_negative, is_positive, Dimensions, Orientation, OrientationPlan};

use crate::boundary::LoadSpace;

/// Grid-fit plan for one footprint orientation.
///
/// `nx = floor((pallet_length + overhang) / footprint_length)`, `ny` likewise
/// on the width axis. Any non-positive or non-finite axis, or an invalid
/// overhang, yields a plan that fits nothing. Counts saturate at `usize::MAX`
/// for vanishingly small footprints.
pub fn evaluate_orientation(
    orientation: Orientation,
    pallet_length: f64,
    pallet_width: f64,
    footprint_length: f64,
    footprint_width: f64,
    overhang: f64,
) -> OrientationPlan {
    let valid = is_positive(pallet_length)
        && is_positive(pallet_width)
        && is_positive(footprint_length)
        && is_positive(footprint_width)
        && is_non_negative(overhang);
    if !valid {
        return OrientationPlan::empty(orientation);
    }

    let nx = grid_count(pallet_length + overhang, footprint_length);
    let ny = grid_count(pallet_width + overhang, footprint_width);
    let used_length = nx as f64 * footprint_length;
    let used_width = ny as f64 * footprint_width;
    let area_used = used_length * used_width;
    let pallet_area = pallet_length * pallet_width;

    OrientationPlan {
        orientation,
        box_footprint_l: footprint_length,
        box_footprint_w: footprint_width,
        nx,
        ny,
        per_layer: nx.saturating_mul(ny),
        utilization: area_used / pallet_area,
        area_used,
        area_free: (pallet_area - area_used).max(0.0),
        residual_length: (pallet_length - used_length).max(0.0),
        residual_width: (pallet_width - used_width).max(0.0),
    }
}

fn grid_count(span: f64, cell: f64) -> usize {
    (span / cell).floor().max(0.0) as usize
}

/// Picks the better of two plans.
///
/// `alternate` wins only if it fits strictly more boxes per layer, or the same
/// number with strictly higher utilization. Ties keep `primary`.
pub fn select_best_orientation<'a>(
    primary: &'a OrientationPlan,
    alternate: Option<&'a OrientationPlan>,
) -> &'a OrientationPlan {
    let Some(alternate) = alternate else {
        return primary;
    };

    if alternate.per_layer > primary.per_layer {
        return alternate;
    }

    if alternate.per_layer == primary.per_layer && alternate.utilization > primary.utilization {
        return alternate;
    }

    primary
}

/// The evaluated plans for one box footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    /// `LxW`, always evaluated.
    pub primary: OrientationPlan,
    /// `WxL`, evaluated only when rotation is allowed.
    pub alternate: Option<OrientationPlan>,
}

impl Candidates {
    /// Evaluates the footprint of `box_dims` in `space`.
    pub fn evaluate(space: &LoadSpace, box_dims: &Dimensions, allow_rotation: bool) -> Self {
        let plan = |orientation: Orientation| {
            let (footprint_length, footprint_width) = box_dims.footprint(orientation);
            evaluate_orientation(
                orientation,
                space.pallet().length,
                space.pallet().width,
                footprint_length,
                footprint_width,
                space.overhang(),
            )
        };

        Self {
            primary: plan(Orientation::LxW),
            alternate: allow_rotation.then(|| plan(Orientation::WxL)),
        }
    }

    /// The selected plan.
    pub fn best(&self) -> &OrientationPlan {
        select_best_orientation(&self.primary, self.alternate.as_ref())
    }

    /// All evaluated plans, primary first.
    pub fn to_vec(&self) -> Vec<OrientationPlan> {
        std::iter::once(self.primary.clone())
            .chain(self.alternate.clone())
            .collect()
    }
}
