//! # Palletizer Layer
//!
//! Grid-per-layer pallet loading for the palletizer load planner.
//!
//! Every box type is laid as a uniform `nx` × `ny` grid per layer in one of two
//! upright orientations; layers stack until the height budget runs out.
//!
//! ## Features
//!
//! - Orientation evaluation and deterministic selection (`LxW` / `WxL`)
//! - Single-box solver with area and volume utilization
//! - Multi-type allocator sharing one height budget in input order
//! - Expansion of plans into pallet-centered box instances
//!
//! ## Example
//!
//! ```
//! use palletizer_core::Dimensions;
//! use palletizer_layer::{solve_single_box, SingleBoxInput};
//!
//! let input = SingleBoxInput::new(
//!     Dimensions::new(1200.0, 1000.0, 150.0),
//!     Dimensions::new(500.0, 350.0, 450.0),
//!     1200.0,
//! );
//! let result = solve_single_box(&input);
//! assert_eq!(result.selected.per_layer, 6);
//! assert_eq!(result.total_boxes, 12);
//! ```

pub mod boundary;
pub mod geometry;
pub mod input;
pub mod instances;
pub mod multi;
pub mod orientation;
pub mod single;

// Re-exports
pub use boundary::LoadSpace;
pub use geometry::BoxType;
pub use input::{MultiTypeInput, SingleBoxInput, DEFAULT_BOX, DEFAULT_MAX_TOTAL_HEIGHT, DEFAULT_PALLET};
pub use instances::{instantiate_single_boxes, stack_instances};
pub use multi::{allocate_multi_type, MultiTypeAllocator};
pub use orientation::{evaluate_orientation, select_best_orientation, Candidates};
pub use single::{solve_single_box, SingleBoxSolver};
pub use palletizer_core::{
    BoxInstance, Config, Error, MultiTypeResult, OrientationPlan, Result, SingleBoxResult, Solver,
};
