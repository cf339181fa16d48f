//! # Palletizer Core
//!
//! Shared value types for the palletizer load planner.
//!
//! This crate holds everything the solvers, the FFI layer and the CLI agree on:
//! dimensions and orientations, orientation plans, box instances, result
//! structs, validation errors and solver configuration.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Dimensions`], [`Orientation`], [`Axis`]
//! - **Results**: [`OrientationPlan`], [`SingleBoxResult`], [`MultiTypeResult`]
//! - **Instances**: [`BoxInstance`], [`PlacementStats`]
//! - **Solver trait**: [`Solver`] with its [`Config`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support (camelCase fields)

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{is_non_negative, is_positive, Axis, BoxTypeId, Dimensions, Orientation};
pub use placement::{BoxInstance, PlacementStats};
pub use result::{
    format_percent, LoadSummary, MultiTypePlacementSummary, MultiTypeResult, OrientationPlan,
    SingleBoxResult,
};
pub use solver::{Config, Solver, DEFAULT_BOX_COLOR, DEFAULT_PALETTE};
