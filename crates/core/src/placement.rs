//! Box instances produced by expanding a grid plan.

use std::collections::BTreeMap;

use nalgebra::Point3;

use crate::geometry::BoxTypeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single positioned box, ready for rendering.
///
/// Coordinates are the box center. The horizontal plane is centered on the
/// pallet (`x` along its length, `z` along its width); `y` is measured from the
/// ground up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoxInstance {
    /// Center along the pallet length.
    pub x: f64,
    /// Center height above the ground.
    pub y: f64,
    /// Center along the pallet width.
    pub z: f64,
    /// Footprint extent along the pallet length.
    pub length: f64,
    /// Footprint extent along the pallet width.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Display color (hex), set for multi-type loads.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
    /// Owning box type, set for multi-type loads.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub type_id: Option<BoxTypeId>,
}

impl BoxInstance {
    /// Creates an uncolored instance centered at `center`.
    pub fn new(center: Point3<f64>, length: f64, width: f64, height: f64) -> Self {
        Self {
            x: center.x,
            y: center.y,
            z: center.z,
            length,
            width,
            height,
            color: None,
            type_id: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the owning box type.
    pub fn with_type_id(mut self, type_id: BoxTypeId) -> Self {
        self.type_id = Some(type_id);
        self
    }

    /// Height of the bottom face above the ground.
    pub fn bottom(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// Height of the top face above the ground.
    pub fn top(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Box volume.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Aggregate figures over a set of instances.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlacementStats {
    /// Total number of instances.
    pub count: usize,
    /// Instances per owning type. Untyped instances are not counted here.
    pub type_distribution: BTreeMap<BoxTypeId, usize>,
    /// Number of distinct layers, keyed by bottom height.
    pub layer_count: usize,
    /// Highest top face, 0 when empty.
    pub stack_top: f64,
    /// Summed box volume.
    pub total_volume: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of instances.
    pub fn from_instances(instances: &[BoxInstance]) -> Self {
        let mut stats = Self {
            count: instances.len(),
            ..Default::default()
        };

        // Bottoms are sums of the same height values, compare in whole micrometers.
        let mut bottoms: Vec<i64> = Vec::with_capacity(instances.len());

        for instance in instances {
            if let Some(type_id) = instance.type_id {
                *stats.type_distribution.entry(type_id).or_insert(0) += 1;
            }
            bottoms.push((instance.bottom() * 1000.0).round() as i64);
            stats.stack_top = stats.stack_top.max(instance.top());
            stats.total_volume += instance.volume();
        }

        bottoms.sort_unstable();
        bottoms.dedup();
        stats.layer_count = bottoms.len();

        stats
    }
}
