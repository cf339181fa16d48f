//! Solver trait and configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed palette cycled over box types by input position.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#2f8f9d", "#e07a5f", "#3d405b", "#81b29a", "#f2cc8f", "#6d597a", "#b56576", "#355070",
    "#e09f3e", "#9e2a2b",
];

/// Color renderers use for instances without an assigned color.
pub const DEFAULT_BOX_COLOR: &str = "#2f8f9d";

/// Common configuration for solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Config {
    /// Colors assigned to box types, cycled by input position.
    pub palette: Vec<String>,

    /// Fallback color for uncolored instances and empty palettes.
    pub default_box_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            default_box_color: DEFAULT_BOX_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the type palette.
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the fallback box color.
    pub fn with_default_box_color(mut self, color: impl Into<String>) -> Self {
        self.default_box_color = color.into();
        self
    }

    /// Color for the type at `position` (0-based) in the input sequence.
    pub fn color_for(&self, position: usize) -> &str {
        if self.palette.is_empty() {
            return &self.default_box_color;
        }
        &self.palette[position % self.palette.len()]
    }
}

/// Trait for load planners.
///
/// Implementations are pure: `solve` never fails and never mutates its input.
/// Validation problems are reported inside the output value.
pub trait Solver {
    /// The request this solver handles.
    type Input;
    /// The result it produces.
    type Output;

    /// Plans the load for `input`.
    fn solve(&self, input: &Self::Input) -> Self::Output;
}
