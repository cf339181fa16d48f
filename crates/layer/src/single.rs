//! Single-box solver.

use palletizer_core::{BoxInstance, Error, SingleBoxResult, Solver};

use crate::input::SingleBoxInput;
use crate::instances::instantiate_single_boxes;
use crate::orientation::Candidates;

/// Plans a pallet loaded with one box size.
///
/// Picks the better footprint orientation, stacks as many full layers as the
/// height budget allows and reports count, area and volume figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleBoxSolver;

impl SingleBoxSolver {
    /// Creates a solver.
    pub fn new() -> Self {
        Self
    }

    /// Expands a result of this solver into box instances.
    pub fn instantiate(
        &self,
        input: &SingleBoxInput,
        result: &SingleBoxResult,
    ) -> Vec<BoxInstance> {
        instantiate_single_boxes(input, result)
    }
}

impl Solver for SingleBoxSolver {
    type Input = SingleBoxInput;
    type Output = SingleBoxResult;

    fn solve(&self, input: &SingleBoxInput) -> SingleBoxResult {
        let space = input.load_space();
        let (structural, warnings): (Vec<Error>, Vec<Error>) = input
            .validation_errors()
            .into_iter()
            .chain(space.headroom_errors())
            .partition(Error::is_structural);
        if !structural.is_empty() {
            log::debug!("single-box input rejected with {} error(s)", structural.len());
            return SingleBoxResult::invalid(structural.iter().map(ToString::to_string).collect());
        }

        let box_dims = &input.box_dims;
        let candidates = Candidates::evaluate(&space, box_dims, input.allow_rotation);
        let selected = candidates.best().clone();

        let layers = if warnings.is_empty() {
            (space.headroom() / box_dims.height).floor().max(0.0) as usize
        } else {
            log::warn!(
                "max total height {} does not exceed pallet height {}",
                input.max_total_height,
                input.pallet.height
            );
            0
        };
        let errors: Vec<String> = warnings.iter().map(ToString::to_string).collect();

        log::debug!(
            "selected {} ({}x{} per layer) with {} layer(s)",
            selected.orientation,
            selected.nx,
            selected.ny,
            layers
        );

        let stacked_height = layers as f64 * box_dims.height;
        let total_boxes = selected.per_layer.saturating_mul(layers);
        let available_height = space.available_height();
        let pallet_area = space.pallet_area();
        let used_area = selected.area_used;
        let total_box_volume = total_boxes as f64 * box_dims.volume();
        let max_load_volume = space.max_load_volume();
        let volume_utilization = if max_load_volume > 0.0 {
            total_box_volume / max_load_volume
        } else {
            0.0
        };

        SingleBoxResult {
            selected,
            candidates: candidates.to_vec(),
            layers,
            total_boxes,
            total_height: input.pallet.height + stacked_height,
            available_height,
            free_height: (available_height - stacked_height).max(0.0),
            pallet_area,
            used_area,
            free_area: (pallet_area - used_area).max(0.0),
            total_box_volume,
            max_load_volume,
            volume_utilization,
            errors,
        }
    }
}

/// Solves a single-box request. Never fails; problems are listed in
/// [`SingleBoxResult::errors`].
pub fn solve_single_box(input: &SingleBoxInput) -> SingleBoxResult {
    SingleBoxSolver::new().solve(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use palletizer_core::{Dimensions, Orientation};

    fn reference_input() -> SingleBoxInput {
        SingleBoxInput::new(
            Dimensions::new(1200.0, 1000.0, 150.0),
            Dimensions::new(500.0, 350.0, 450.0),
            1200.0,
        )
    }

    #[test]
    fn test_reference_load() {
        let result = solve_single_box(&reference_input());

        assert!(result.is_valid());
        assert_eq!(result.selected.nx, 3);
        assert_eq!(result.selected.ny, 2);
        assert_eq!(result.selected.per_layer, 6);
        assert_eq!(result.layers, 2);
        assert_eq!(result.total_boxes, 12);
        assert_relative_eq!(result.total_height, 1050.0);
    }

    #[test]
    fn test_area_and_height_metrics() {
        let result = solve_single_box(&reference_input());

        assert_relative_eq!(result.pallet_area, 1_200_000.0);
        assert_relative_eq!(result.used_area, 1_050_000.0);
        assert_relative_eq!(result.free_area, 150_000.0);
        assert_relative_eq!(result.available_height, 1050.0);
        assert_relative_eq!(result.free_height, 150.0);
        assert_eq!(result.candidates.len(), 2);
    }

    #[test]
    fn test_volume_metrics() {
        let result = solve_single_box(&reference_input());

        assert_relative_eq!(result.total_box_volume, 12.0 * 500.0 * 350.0 * 450.0);
        assert_relative_eq!(result.max_load_volume, 1_200_000.0 * 1050.0);
        assert_relative_eq!(result.volume_utilization, 0.75);
    }

    #[test]
    fn test_rotation_disabled_uses_lxw() {
        let input = SingleBoxInput::new(
            Dimensions::new(1200.0, 1000.0, 150.0),
            Dimensions::new(700.0, 300.0, 200.0),
            900.0,
        )
        .with_rotation(false);

        let result = solve_single_box(&input);
        assert_eq!(result.selected.orientation, Orientation::LxW);
        assert_eq!(result.selected.per_layer, 3);
        assert_eq!(result.candidates.len(), 1);
    }

    #[test]
    fn test_height_budget_warning() {
        let input = SingleBoxInput {
            max_total_height: 150.0,
            ..reference_input()
        };

        let result = solve_single_box(&input);
        assert_eq!(result.layers, 0);
        assert_eq!(result.total_boxes, 0);
        assert_relative_eq!(result.total_height, 150.0);
        assert_eq!(result.errors, vec![Error::HeightBudget.to_string()]);

        // orientation and areas stay populated
        assert_eq!(result.selected.per_layer, 6);
        assert_eq!(result.candidates.len(), 2);
        assert_relative_eq!(result.pallet_area, 1_200_000.0);
        assert_eq!(result.available_height, 0.0);
        assert_eq!(result.volume_utilization, 0.0);
    }

    #[test]
    fn test_invalid_input_is_zeroed() {
        let input = SingleBoxInput::new(
            Dimensions::new(1200.0, 1000.0, 0.0),
            Dimensions::new(-500.0, 350.0, 450.0),
            1200.0,
        )
        .with_overhang(-1.0);

        let result = solve_single_box(&input);
        assert_eq!(result.selected.per_layer, 0);
        assert_eq!(result.layers, 0);
        assert_eq!(result.total_boxes, 0);
        assert_eq!(result.total_height, 0.0);
        assert_eq!(result.volume_utilization, 0.0);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_box_taller_than_budget() {
        let input = SingleBoxInput {
            max_total_height: 500.0,
            ..reference_input()
        };

        let result = solve_single_box(&input);
        assert!(result.is_valid());
        assert_eq!(result.layers, 0);
        assert_eq!(result.total_boxes, 0);
        assert_relative_eq!(result.free_height, 350.0);
    }

    #[test]
    fn test_tiny_dimensions_saturate() {
        let input = SingleBoxInput::new(
            Dimensions::new(1200.0, 1000.0, 150.0),
            Dimensions::new(1e-9, 1e-9, 450.0),
            1200.0,
        );
        let result = solve_single_box(&input);
        assert!(result.is_valid());
        assert_eq!(result.selected.per_layer, usize::MAX);
        assert_eq!(result.layers, 2);
        assert_eq!(result.total_boxes, usize::MAX);

        let flat = SingleBoxInput {
            box_dims: Dimensions::new(500.0, 350.0, 1e-300),
            ..reference_input()
        };
        let result = solve_single_box(&flat);
        assert!(result.is_valid());
        assert_eq!(result.layers, usize::MAX);
        assert_eq!(result.total_boxes, usize::MAX);
        assert!(result.total_height >= 150.0);
    }

    #[test]
    fn test_solver_trait() {
        let solver = SingleBoxSolver::new();
        let input = reference_input();
        let result = solver.solve(&input);
        assert_eq!(solver.instantiate(&input, &result).len(), result.total_boxes);
    }
}
