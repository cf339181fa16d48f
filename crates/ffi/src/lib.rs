//! # Palletizer FFI
//!
//! C FFI interface for the palletizer load planner.
//!
//! Requests and responses are JSON strings, so the solvers can be driven from
//! C#, Python or a browser host without sharing Rust types.

mod api;
mod types;

pub use api::*;
pub use types::*;
