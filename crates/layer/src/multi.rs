//! Multi-type allocator.
//!
//! Box types share one height budget and claim it strictly in input order:
//! each type stacks its layers on top of everything placed before it. Units
//! that do not fit become overflow. Reordering the types changes the outcome.

use palletizer_core::{
    BoxInstance, Config, Error, MultiTypePlacementSummary, MultiTypeResult, OrientationPlan,
    Solver,
};

use crate::geometry::BoxType;
use crate::input::MultiTypeInput;
use crate::instances::stack_instances;
use crate::orientation::Candidates;

/// Allocates a shared height budget across box types, first come first served.
#[derive(Debug, Clone, Default)]
pub struct MultiTypeAllocator {
    config: Config,
}

/// Units and layers granted to one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Allotment {
    placed: usize,
    layers_used: usize,
}

impl MultiTypeAllocator {
    /// Creates an allocator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an allocator with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// How many units of `box_type` fit in `remaining_height` with `plan`.
    fn allot(box_type: &BoxType, plan: &OrientationPlan, remaining_height: f64) -> Allotment {
        if !plan.fits() || remaining_height < box_type.height {
            return Allotment::default();
        }

        let layers_capacity = (remaining_height / box_type.height).floor() as usize;
        let max_by_height = layers_capacity.saturating_mul(plan.per_layer);
        let placed = box_type.units.min(max_by_height);
        let layers_used = if placed > 0 {
            placed.div_ceil(plan.per_layer)
        } else {
            0
        };

        Allotment {
            placed,
            layers_used,
        }
    }
}

impl Solver for MultiTypeAllocator {
    type Input = MultiTypeInput;
    type Output = MultiTypeResult;

    fn solve(&self, input: &MultiTypeInput) -> MultiTypeResult {
        let space = input.load_space();
        let (structural, warnings): (Vec<Error>, Vec<Error>) = input
            .validation_errors()
            .into_iter()
            .chain(space.headroom_errors())
            .partition(Error::is_structural);
        if !structural.is_empty() {
            log::debug!("multi-type input rejected with {} error(s)", structural.len());
            return MultiTypeResult::invalid(structural.iter().map(ToString::to_string).collect());
        }

        if !warnings.is_empty() {
            log::warn!(
                "max total height {} does not exceed pallet height {}",
                input.max_total_height,
                input.pallet.height
            );
        }
        let errors: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        let available_height = space.available_height();

        let mut used_height = 0.0_f64;
        let mut boxes: Vec<BoxInstance> = Vec::new();
        let mut by_type = Vec::with_capacity(input.box_types.len());

        for (index, box_type) in input.box_types.iter().enumerate() {
            let candidates =
                Candidates::evaluate(&space, &box_type.dimensions(), input.allow_rotation);
            let selected = candidates.best();
            let remaining_height = (available_height - used_height).max(0.0);
            let allotment = Self::allot(box_type, selected, remaining_height);
            let color = self.config.color_for(index).to_string();

            boxes.extend(
                stack_instances(
                    &space,
                    selected,
                    box_type.height,
                    used_height,
                    allotment.placed,
                )
                .map(|b| b.with_color(color.as_str()).with_type_id(box_type.id)),
            );

            let overflow = box_type.units - allotment.placed;
            if overflow > 0 {
                log::warn!(
                    "type {}: {} of {} unit(s) overflow",
                    box_type.id,
                    overflow,
                    box_type.units
                );
            }
            log::debug!(
                "type {}: {} {}x{} per layer, placed {} in {} layer(s) from {}",
                box_type.id,
                selected.orientation,
                selected.nx,
                selected.ny,
                allotment.placed,
                allotment.layers_used,
                used_height
            );

            used_height += allotment.layers_used as f64 * box_type.height;

            by_type.push(MultiTypePlacementSummary {
                type_id: box_type.id,
                requested: box_type.units,
                placed: allotment.placed,
                overflow,
                layers_used: allotment.layers_used,
                orientation: selected.orientation,
                box_footprint_l: selected.box_footprint_l,
                box_footprint_w: selected.box_footprint_w,
                nx: selected.nx,
                ny: selected.ny,
                per_layer: selected.per_layer,
                color,
            });
        }

        MultiTypeResult {
            boxes,
            requested_total: by_type.iter().map(|s| s.requested).sum(),
            placed_total: by_type.iter().map(|s| s.placed).sum(),
            overflow_total: by_type.iter().map(|s| s.overflow).sum(),
            by_type,
            available_height,
            height_used: used_height,
            height_free: (available_height - used_height).max(0.0),
            errors,
        }
    }
}

/// Allocates a multi-type request with the default palette. Never fails;
/// problems are listed in [`MultiTypeResult::errors`].
pub fn allocate_multi_type(input: &MultiTypeInput) -> MultiTypeResult {
    MultiTypeAllocator::default_config().solve(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use palletizer_core::{Dimensions, DEFAULT_PALETTE};

    fn euro_input() -> MultiTypeInput {
        MultiTypeInput::new(Dimensions::new(1200.0, 1000.0, 150.0), 1200.0)
    }

    #[test]
    fn test_two_types_fit() {
        let input = euro_input()
            .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(8))
            .with_box_type(BoxType::new(2, 600.0, 400.0, 200.0).with_units(12));

        let result = allocate_multi_type(&input);

        assert!(result.errors.is_empty());
        assert_eq!(result.placed_total, 20);
        assert_eq!(result.overflow_total, 0);
        assert_eq!(result.boxes.len(), 20);
        assert_relative_eq!(result.height_used, 1000.0);
        assert_relative_eq!(result.height_free, 50.0);
        assert!(result.all_placed());
    }

    #[test]
    fn test_overflow_by_height() {
        let input = euro_input()
            .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(40))
            .with_box_type(BoxType::new(2, 600.0, 400.0, 200.0).with_units(10));

        let result = allocate_multi_type(&input);
        let first = &result.by_type[0];
        let second = &result.by_type[1];

        assert_eq!(first.placed, 20);
        assert_eq!(first.overflow, 20);
        assert_eq!(first.layers_used, 5);
        assert_eq!(second.placed, 0);
        assert_eq!(second.overflow, 10);
        assert_eq!(second.layers_used, 0);
        assert_eq!(result.overflow_total, 30);
        assert_eq!(result.requested_total, 50);
    }

    #[test]
    fn test_footprint_too_large() {
        let input = MultiTypeInput::new(Dimensions::new(500.0, 300.0, 150.0), 1200.0)
            .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(6));

        let result = allocate_multi_type(&input);
        assert_eq!(result.by_type[0].per_layer, 0);
        assert_eq!(result.by_type[0].placed, 0);
        assert_eq!(result.by_type[0].overflow, 6);
        assert!(result.boxes.is_empty());
    }

    #[test]
    fn test_rotation_improves_placement() {
        let base = MultiTypeInput::new(Dimensions::new(1000.0, 700.0, 150.0), 1000.0)
            .with_box_type(BoxType::new(1, 700.0, 400.0, 200.0).with_units(8));

        let without = allocate_multi_type(&base.clone().with_rotation(false));
        let with = allocate_multi_type(&base.with_rotation(true));

        assert!(with.by_type[0].placed > without.by_type[0].placed);
    }

    #[test]
    fn test_instances_grouped_by_type() {
        let input = euro_input()
            .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(4))
            .with_box_type(BoxType::new(2, 600.0, 400.0, 200.0).with_units(4));

        let result = allocate_multi_type(&input);
        assert!(result.boxes[..4].iter().all(|b| b.type_id == Some(1)));
        assert!(result.boxes[4..8].iter().all(|b| b.type_id == Some(2)));
    }

    #[test]
    fn test_partial_layer_consumes_full_layer_height() {
        // 6 per layer: 7 units take 2 layers
        let input = euro_input()
            .with_box_type(BoxType::new(1, 400.0, 400.0, 100.0).with_units(7))
            .with_box_type(BoxType::new(2, 600.0, 500.0, 300.0).with_units(1));

        let result = allocate_multi_type(&input);
        let first = &result.by_type[0];
        assert_eq!(first.per_layer, 6);
        assert_eq!(first.layers_used, 2);

        let second_box = result.boxes_of(2).next().map(|b| b.bottom());
        assert_eq!(second_box, Some(150.0 + 200.0));
        assert_relative_eq!(result.height_used, 500.0);
    }

    #[test]
    fn test_colors_follow_position() {
        let input = euro_input()
            .with_box_type(BoxType::new(42, 600.0, 400.0, 200.0).with_units(1))
            .with_box_type(BoxType::new(7, 600.0, 400.0, 200.0).with_units(1));

        let result = allocate_multi_type(&input);
        assert_eq!(result.by_type[0].color, DEFAULT_PALETTE[0]);
        assert_eq!(result.by_type[1].color, DEFAULT_PALETTE[1]);
        assert_eq!(result.boxes[1].color.as_deref(), Some(DEFAULT_PALETTE[1]));
    }

    #[test]
    fn test_custom_palette_wraps() {
        let allocator = MultiTypeAllocator::new(Config::new().with_palette(["#111111", "#222222"]));
        let mut input = euro_input();
        for id in 1..=3 {
            input = input.with_box_type(BoxType::new(id, 300.0, 250.0, 100.0).with_units(1));
        }

        let result = allocator.solve(&input);
        let colors: Vec<_> = result.by_type.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["#111111", "#222222", "#111111"]);
    }

    #[test]
    fn test_height_budget_warning_keeps_summaries() {
        let input = MultiTypeInput::new(Dimensions::new(1200.0, 1000.0, 150.0), 150.0)
            .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(3));

        let result = allocate_multi_type(&input);
        assert_eq!(result.errors, vec![Error::HeightBudget.to_string()]);
        assert_eq!(result.by_type.len(), 1);
        assert_eq!(result.by_type[0].per_layer, 4);
        assert_eq!(result.by_type[0].overflow, 3);
        assert_eq!(result.available_height, 0.0);
        assert!(result.boxes.is_empty());
    }

    #[test]
    fn test_tiny_dimensions_saturate() {
        let input = euro_input()
            .with_box_type(BoxType::new(1, 600.0, 400.0, 1e-300).with_units(3))
            .with_box_type(BoxType::new(2, 1e-9, 1e-9, 200.0).with_units(5));

        let result = allocate_multi_type(&input);
        assert!(result.errors.is_empty());
        assert_eq!(result.by_type[0].placed, 3);
        assert_eq!(result.by_type[0].layers_used, 1);
        assert_eq!(result.by_type[1].per_layer, usize::MAX);
        assert_eq!(result.by_type[1].placed, 5);
        assert_eq!(result.by_type[1].layers_used, 1);
        assert_eq!(result.placed_total, 8);
        assert_eq!(result.boxes.len(), 8);
        assert!(result.height_used <= result.available_height);
    }

    #[test]
    fn test_invalid_input_is_empty() {
        let input = euro_input()
            .with_overhang(-1.0)
            .with_box_type(BoxType::new(1, 600.0, 0.0, 200.0).with_units(0));

        let result = allocate_multi_type(&input);
        assert_eq!(result.errors.len(), 3);
        assert!(result.boxes.is_empty());
        assert!(result.by_type.is_empty());
        assert_eq!(result.requested_total, 0);
        assert_eq!(result.height_used, 0.0);
    }

    #[test]
    fn test_no_types_is_invalid() {
        let result = allocate_multi_type(&euro_input());
        assert_eq!(result.errors, vec![Error::NoBoxTypes.to_string()]);
    }
}
