//! Expansion of grid plans into positioned box instances.

use palletizer_core::{BoxInstance, OrientationPlan, SingleBoxResult};

use crate::boundary::LoadSpace;
use crate::input::SingleBoxInput;

/// Upper bound on up-front allocation; larger loads grow as they are filled.
const PREALLOCATE_LIMIT: usize = 4096;

/// Expands a single-box result into its `nx * ny * layers` instances.
///
/// Iterates layer, then `ix`, then `iy`. Returns nothing when no layer or no
/// box per layer fits.
pub fn instantiate_single_boxes(
    input: &SingleBoxInput,
    result: &SingleBoxResult,
) -> Vec<BoxInstance> {
    let plan = &result.selected;
    if result.layers == 0 || !plan.fits() {
        return Vec::new();
    }

    let space = input.load_space();
    let height = input.box_dims.height;
    let mut boxes =
        Vec::with_capacity(plan.per_layer.saturating_mul(result.layers).min(PREALLOCATE_LIMIT));

    for layer in 0..result.layers {
        let base = layer as f64 * height;
        for ix in 0..plan.nx {
            for iy in 0..plan.ny {
                let center = space.cell_center(
                    plan.box_footprint_l,
                    plan.box_footprint_w,
                    height,
                    ix,
                    iy,
                    base,
                );
                boxes.push(BoxInstance::new(
                    center,
                    plan.box_footprint_l,
                    plan.box_footprint_w,
                    height,
                ));
            }
        }
    }

    boxes
}

/// Instances for `count` units of one type stacked from `base` above the
/// pallet top, in unit order.
///
/// Unit `i` sits in layer `i / per_layer`; within the layer it fills the
/// length axis first. Yields nothing if the plan fits no box.
pub fn stack_instances<'a>(
    space: &'a LoadSpace,
    plan: &'a OrientationPlan,
    box_height: f64,
    base: f64,
    count: usize,
) -> impl Iterator<Item = BoxInstance> + 'a {
    let count = if !plan.fits() || plan.nx == 0 {
        0
    } else {
        count
    };

    (0..count).map(move |unit| {
        let layer = unit / plan.per_layer;
        let index_in_layer = unit % plan.per_layer;
        let ix = index_in_layer % plan.nx;
        let iy = index_in_layer / plan.nx;
        let center = space.cell_center(
            plan.box_footprint_l,
            plan.box_footprint_w,
            box_height,
            ix,
            iy,
            base + layer as f64 * box_height,
        );
        BoxInstance::new(center, plan.box_footprint_l, plan.box_footprint_w, box_height)
    })
}
