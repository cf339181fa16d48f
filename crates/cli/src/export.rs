//! JSON export of a run: the request, the result and when it was produced.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use palletizer_core::{BoxInstance, Error};
use serde::{Deserialize, Serialize};

/// File name used when `--output` is given without a path.
pub const DEFAULT_EXPORT_FILE: &str = "pallet-layout.json";

/// Exported document, `{ input, result, generatedAt }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload<I, R> {
    /// The request as solved.
    pub input: I,
    /// The solver output.
    pub result: R,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    /// Positioned boxes, for single runs exported with instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxes: Option<Vec<BoxInstance>>,
}

impl<I: Serialize, R: Serialize> ExportPayload<I, R> {
    /// Creates a payload stamped with the current time.
    pub fn new(input: I, result: R) -> Self {
        Self::at(input, result, Utc::now())
    }

    /// Creates a payload stamped with `generated_at`.
    pub fn at(input: I, result: R, generated_at: DateTime<Utc>) -> Self {
        Self {
            input,
            result,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            boxes: None,
        }
    }

    /// Attaches box instances.
    pub fn with_boxes(mut self, boxes: Vec<BoxInstance>) -> Self {
        self.boxes = Some(boxes);
        self
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> palletizer_core::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Writes the payload to `path`.
    pub fn save_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("export written to {}", path.display());
        Ok(())
    }
}
