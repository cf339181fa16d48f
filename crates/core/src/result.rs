//! Solve result representation.

use crate::geometry::{BoxTypeId, Orientation};
use crate::placement::BoxInstance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formats a ratio as a percentage with at most two decimals
/// (`0.855` → `"85.5%"`, `0.75` → `"75%"`).
pub fn format_percent(ratio: f64) -> String {
    let fixed = format!("{:.2}", ratio * 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Grid-fit evaluation of one footprint orientation on a pallet.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrientationPlan {
    /// Which box axis runs along the pallet length.
    pub orientation: Orientation,
    /// Realized footprint extent along the pallet length.
    pub box_footprint_l: f64,
    /// Realized footprint extent along the pallet width.
    pub box_footprint_w: f64,
    /// Boxes along the pallet length.
    pub nx: usize,
    /// Boxes along the pallet width.
    pub ny: usize,
    /// Boxes per layer (`nx * ny`).
    pub per_layer: usize,
    /// `area_used / pallet area`.
    pub utilization: f64,
    /// Area covered by the grid.
    pub area_used: f64,
    /// Pallet area not covered by the grid, never negative.
    pub area_free: f64,
    /// Unused strip along the pallet length, never negative.
    pub residual_length: f64,
    /// Unused strip along the pallet width, never negative.
    pub residual_width: f64,
}

impl OrientationPlan {
    /// A plan that fits nothing, tagged `orientation`.
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    /// Returns true if at least one box fits per layer.
    pub fn fits(&self) -> bool {
        self.per_layer > 0
    }
}

/// Result of a single-box solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SingleBoxResult {
    /// The winning orientation plan.
    pub selected: OrientationPlan,
    /// Every evaluated plan: one without rotation, two with.
    pub candidates: Vec<OrientationPlan>,
    /// Full layers that fit in the height budget.
    pub layers: usize,
    /// `selected.per_layer * layers`.
    pub total_boxes: usize,
    /// Pallet height plus stacked layers.
    pub total_height: f64,
    /// Height budget above the pallet, never negative.
    pub available_height: f64,
    /// Unused part of the height budget.
    pub free_height: f64,
    /// Pallet footprint area.
    pub pallet_area: f64,
    /// Area covered by the selected grid.
    pub used_area: f64,
    /// Pallet area left uncovered.
    pub free_area: f64,
    /// Summed volume of all boxes.
    pub total_box_volume: f64,
    /// Pallet area times available height.
    pub max_load_volume: f64,
    /// `total_box_volume / max_load_volume`, 0 when the latter is 0.
    pub volume_utilization: f64,
    /// Human-readable validation messages, empty on success.
    pub errors: Vec<String>,
}

impl SingleBoxResult {
    /// The zeroed result returned for structurally invalid input.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            selected: OrientationPlan::empty(Orientation::LxW),
            candidates: vec![OrientationPlan::empty(Orientation::LxW)],
            layers: 0,
            total_boxes: 0,
            total_height: 0.0,
            available_height: 0.0,
            free_height: 0.0,
            pallet_area: 0.0,
            used_area: 0.0,
            free_area: 0.0,
            total_box_volume: 0.0,
            max_load_volume: 0.0,
            volume_utilization: 0.0,
            errors,
        }
    }

    /// Returns true if no validation message was produced.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Area utilization of the selected plan as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format_percent(self.selected.utilization)
    }

    /// Volumetric utilization as a percentage string.
    pub fn volume_utilization_percent(&self) -> String {
        format_percent(self.volume_utilization)
    }
}

/// Outcome for one box type in a multi-type load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MultiTypePlacementSummary {
    /// Caller-assigned type id.
    pub type_id: BoxTypeId,
    /// Units requested.
    pub requested: usize,
    /// Units placed.
    pub placed: usize,
    /// `requested - placed`.
    pub overflow: usize,
    /// Layers consumed by this type, the last one possibly partial.
    pub layers_used: usize,
    /// Selected orientation.
    pub orientation: Orientation,
    /// Footprint extent along the pallet length.
    pub box_footprint_l: f64,
    /// Footprint extent along the pallet width.
    pub box_footprint_w: f64,
    /// Boxes along the pallet length.
    pub nx: usize,
    /// Boxes along the pallet width.
    pub ny: usize,
    /// Boxes per layer.
    pub per_layer: usize,
    /// Display color assigned by input position.
    pub color: String,
}

/// Result of a multi-type allocation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MultiTypeResult {
    /// All placed instances, grouped by type in input order.
    pub boxes: Vec<BoxInstance>,
    /// One summary per input type, in input order.
    pub by_type: Vec<MultiTypePlacementSummary>,
    /// Sum of requested units.
    pub requested_total: usize,
    /// Sum of placed units.
    pub placed_total: usize,
    /// Sum of overflow units.
    pub overflow_total: usize,
    /// Height budget above the pallet, never negative.
    pub available_height: f64,
    /// Height consumed by all types.
    pub height_used: f64,
    /// Height budget left over.
    pub height_free: f64,
    /// Human-readable validation messages, empty on success.
    pub errors: Vec<String>,
}

impl MultiTypeResult {
    /// The empty result returned for structurally invalid input.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }

    /// Returns true if no validation message was produced.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if every requested unit was placed.
    pub fn all_placed(&self) -> bool {
        self.overflow_total == 0
    }

    /// Returns the summary for `type_id`, if present.
    pub fn summary_for(&self, type_id: BoxTypeId) -> Option<&MultiTypePlacementSummary> {
        self.by_type.iter().find(|s| s.type_id == type_id)
    }

    /// Returns the instances owned by `type_id`.
    pub fn boxes_of(&self, type_id: BoxTypeId) -> impl Iterator<Item = &BoxInstance> {
        self.boxes
            .iter()
            .filter(move |b| b.type_id == Some(type_id))
    }
}

/// Headline figures shared by single and multi-type results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoadSummary {
    /// Units requested (single-box: the computed capacity).
    pub total_requested: usize,
    /// Units placed.
    pub total_placed: usize,
    /// Units left off the pallet.
    pub total_overflow: usize,
    /// Height consumed above the pallet.
    pub height_used: f64,
    /// Height budget left over.
    pub height_free: f64,
    /// Number of validation messages.
    pub error_count: usize,
}

impl From<&SingleBoxResult> for LoadSummary {
    fn from(result: &SingleBoxResult) -> Self {
        Self {
            total_requested: result.total_boxes,
            total_placed: result.total_boxes,
            total_overflow: 0,
            height_used: result.available_height - result.free_height,
            height_free: result.free_height,
            error_count: result.errors.len(),
        }
    }
}

impl From<&MultiTypeResult> for LoadSummary {
    fn from(result: &MultiTypeResult) -> Self {
        Self {
            total_requested: result.requested_total,
            total_placed: result.placed_total,
            total_overflow: result.overflow_total,
            height_used: result.height_used,
            height_free: result.height_free,
            error_count: result.errors.len(),
        }
    }
}
