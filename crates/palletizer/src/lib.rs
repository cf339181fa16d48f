//! # Palletizer
//!
//! Pallet loading planner: how many boxes fit per layer, how many layers fit
//! under a height budget, and how several box types share that budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletizer::core::Dimensions;
//! use palletizer::layer::{allocate_multi_type, BoxType, MultiTypeInput};
//!
//! let input = MultiTypeInput::new(Dimensions::new(1200.0, 1000.0, 150.0), 1200.0)
//!     .with_box_type(BoxType::new(1, 600.0, 400.0, 200.0).with_units(40))
//!     .with_box_type(BoxType::new(2, 600.0, 400.0, 200.0).with_units(10));
//!
//! let result = allocate_multi_type(&input);
//! assert_eq!(result.placed_total, 20);
//! assert_eq!(result.overflow_total, 30);
//! ```
//!
//! ## Feature Flags
//!
//! - `layer` (default): grid-per-layer solvers
//! - `serde`: Serialization support

/// Shared value types and the solver trait.
pub use palletizer_core as core;

/// Grid-per-layer solvers.
#[cfg(feature = "layer")]
pub use palletizer_layer as layer;

// Re-export commonly used types at root level
pub use palletizer_core::{
    BoxInstance, Config, Dimensions, Error, MultiTypeResult, Orientation, Result,
    SingleBoxResult, Solver,
};
