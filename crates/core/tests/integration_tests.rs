//! Integration tests for palletizer-core.

use palletizer_core::geometry::{Axis, Dimensions, Orientation};
use palletizer_core::placement::{BoxInstance, PlacementStats};
use palletizer_core::result::{LoadSummary, MultiTypeResult, OrientationPlan, SingleBoxResult};
use palletizer_core::solver::{Config, DEFAULT_BOX_COLOR, DEFAULT_PALETTE};
use palletizer_core::Error;

mod geometry_tests {
    use super::*;

    #[test]
    fn test_footprint_per_orientation() {
        let dims = Dimensions::new(500.0, 350.0, 450.0);
        assert_eq!(dims.footprint(Orientation::LxW), (500.0, 350.0));
        assert_eq!(dims.footprint(Orientation::WxL), (350.0, 500.0));
        assert_eq!(dims.get(Axis::Height), 450.0);
    }

    #[test]
    fn test_invalid_axes_in_order() {
        let dims = Dimensions::new(0.0, f64::INFINITY, -1.0);
        assert_eq!(dims.invalid_axes(), Axis::ALL.to_vec());
        assert!(!dims.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimensions::new(1200.0, 1000.0, 150.0).to_string(), "1200x1000x150");
        assert_eq!(Orientation::WxL.to_string(), "WxL");
    }
}

mod result_tests {
    use super::*;

    fn single_result() -> SingleBoxResult {
        SingleBoxResult {
            selected: OrientationPlan {
                orientation: Orientation::WxL,
                nx: 3,
                ny: 2,
                per_layer: 6,
                utilization: 0.875,
                ..Default::default()
            },
            layers: 2,
            total_boxes: 12,
            total_height: 1050.0,
            available_height: 1050.0,
            free_height: 150.0,
            volume_utilization: 0.75,
            ..SingleBoxResult::invalid(Vec::new())
        }
    }

    #[test]
    fn test_invalid_single_is_zeroed() {
        let result = SingleBoxResult::invalid(vec![Error::NegativeOverhang.to_string()]);
        assert!(!result.is_valid());
        assert!(!result.selected.fits());
        assert_eq!(result.candidates, vec![OrientationPlan::empty(Orientation::LxW)]);
        assert_eq!(result.total_boxes, 0);
    }

    #[test]
    fn test_percentages() {
        let result = single_result();
        assert_eq!(result.utilization_percent(), "87.5%");
        assert_eq!(result.volume_utilization_percent(), "75%");
    }

    #[test]
    fn test_single_summary() {
        let summary = LoadSummary::from(&single_result());
        assert_eq!(summary.total_placed, 12);
        assert_eq!(summary.total_overflow, 0);
        assert_eq!(summary.height_used, 900.0);
        assert_eq!(summary.height_free, 150.0);
        assert_eq!(summary.error_count, 0);
    }

    #[test]
    fn test_invalid_multi_is_empty() {
        let result = MultiTypeResult::invalid(vec![Error::NoBoxTypes.to_string()]);
        assert!(!result.is_valid());
        assert!(result.all_placed());
        assert!(result.summary_for(1).is_none());
        assert_eq!(result.boxes_of(1).count(), 0);
        assert_eq!(LoadSummary::from(&result).error_count, 1);
    }
}

mod placement_tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_stats_ignore_untyped_distribution() {
        let instances = vec![
            BoxInstance::new(Point3::new(0.0, 250.0, 0.0), 500.0, 350.0, 200.0),
            BoxInstance::new(Point3::new(0.0, 450.0, 0.0), 500.0, 350.0, 200.0).with_type_id(3),
        ];

        let stats = PlacementStats::from_instances(&instances);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.type_distribution.len(), 1);
        assert_eq!(stats.layer_count, 2);
        assert_eq!(stats.stack_top, 550.0);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_palette_cycles() {
        let config = Config::default();
        assert_eq!(config.color_for(0), DEFAULT_PALETTE[0]);
        assert_eq!(config.color_for(DEFAULT_PALETTE.len()), DEFAULT_PALETTE[0]);
        assert_eq!(config.color_for(DEFAULT_PALETTE.len() + 3), DEFAULT_PALETTE[3]);
    }

    #[test]
    fn test_empty_palette_uses_default_color() {
        let config = Config::new().with_palette(Vec::<String>::new());
        assert_eq!(config.color_for(5), DEFAULT_BOX_COLOR);

        let config = config.with_default_box_color("#000000");
        assert_eq!(config.color_for(0), "#000000");
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_config_partial_json() {
        let config: Config = serde_json::from_str(r##"{"palette":["#abcdef"]}"##).unwrap();
        assert_eq!(config.color_for(4), "#abcdef");
        assert_eq!(config.default_box_color, DEFAULT_BOX_COLOR);
    }

    #[test]
    fn test_instance_omits_missing_fields() {
        let instance = BoxInstance::new(nalgebra::Point3::origin(), 1.0, 2.0, 3.0);
        let json = serde_json::to_value(&instance).unwrap();
        assert!(json.get("color").is_none());
        assert!(json.get("typeId").is_none());
        assert_eq!(json["width"], 2.0);
    }
}
