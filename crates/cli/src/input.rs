//! Request loading.

use std::fs;
use std::path::Path;

use anyhow::Context;
use palletizer_core::Dimensions;
use palletizer_layer::{MultiTypeInput, SingleBoxInput};

/// Parses `LxWxH` (e.g. `1200x1000x150`) into dimensions.
///
/// Values are not range-checked here; the solvers report non-positive axes.
pub fn parse_dimensions(s: &str) -> Result<Dimensions, String> {
    let parts: Vec<&str> = s.split(['x', 'X']).map(str::trim).collect();
    let [length, width, height] = parts.as_slice() else {
        return Err(format!("expected LxWxH, got '{}'", s));
    };

    let parse = |name: &str, value: &str| {
        value
            .parse::<f64>()
            .map_err(|_| format!("invalid {} '{}' in '{}'", name, value, s))
    };

    Ok(Dimensions::new(
        parse("length", *length)?,
        parse("width", *width)?,
        parse("height", *height)?,
    ))
}

/// Reads a single-box request. Missing fields take their defaults.
pub fn load_single_input(path: impl AsRef<Path>) -> anyhow::Result<SingleBoxInput> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid request in {}", path.display()))
}

/// Reads a multi-type request. Missing fields other than `boxTypes` take their
/// defaults.
pub fn load_multi_input(path: impl AsRef<Path>) -> anyhow::Result<MultiTypeInput> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid request in {}", path.display()))
}
