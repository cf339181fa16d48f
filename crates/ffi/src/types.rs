//! FFI type definitions.

use palletizer_core::{BoxInstance, MultiTypeResult, SingleBoxResult};
use palletizer_layer::{MultiTypeInput, SingleBoxInput};
use serde::{Deserialize, Serialize};

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One box size, full layers.
    #[default]
    Single,
    /// Several box types sharing the height budget.
    Multi,
}

/// Request for the single-box solver.
///
/// Input fields sit at the top level next to the request options; omitted
/// input fields take their default values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Also return the positioned box instances.
    #[serde(default)]
    pub include_instances: bool,

    /// The solver input.
    #[serde(flatten)]
    pub input: SingleBoxInput,
}

/// Request for the multi-type allocator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Palette override, cycled by type position.
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// The allocator input.
    #[serde(flatten)]
    pub input: MultiTypeInput,
}

/// Solver output carried by a [`SolveResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveOutput {
    /// Single-box result.
    Single(SingleBoxResult),
    /// Multi-type result.
    Multi(MultiTypeResult),
}

/// Response for solve operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// API version.
    pub version: String,

    /// Whether the request parsed and produced no validation message.
    pub success: bool,

    /// First validation message, or the parse error.
    pub error: Option<String>,

    /// Every validation message.
    #[serde(default)]
    pub errors: Vec<String>,

    /// Solver output, absent when the request did not parse.
    #[serde(default)]
    pub result: Option<SolveOutput>,

    /// Positioned boxes for single mode, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<BoxInstance>>,
}

impl SolveResponse {
    /// Response for a request that could not be parsed.
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(message.clone()),
            errors: vec![message],
            result: None,
            instances: None,
        }
    }

    fn from_errors(errors: &[String], result: SolveOutput) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: errors.is_empty(),
            error: errors.first().cloned(),
            errors: errors.to_vec(),
            result: Some(result),
            instances: None,
        }
    }

    /// Attaches instances.
    pub fn with_instances(mut self, instances: Vec<BoxInstance>) -> Self {
        self.instances = Some(instances);
        self
    }
}

impl From<SingleBoxResult> for SolveResponse {
    fn from(result: SingleBoxResult) -> Self {
        let errors = result.errors.clone();
        Self::from_errors(&errors, SolveOutput::Single(result))
    }
}

impl From<MultiTypeResult> for SolveResponse {
    fn from(result: MultiTypeResult) -> Self {
        let errors = result.errors.clone();
        Self::from_errors(&errors, SolveOutput::Multi(result))
    }
}
