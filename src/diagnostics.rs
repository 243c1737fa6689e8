//! Serializable deterministic state snapshots used by regression tests and
//! debugging tooling.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisDimension, Bounds, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Captured state of one constructed axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub dimension: AxisDimension,
    pub axis_length: f64,
    pub range: ValueRange,
    pub ticks: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

impl AxisSnapshot {
    #[must_use]
    pub fn capture(axis: &dyn Axis) -> Self {
        Self {
            dimension: axis.dimension(),
            axis_length: axis.axis_length(),
            range: axis.range(),
            ticks: axis.ticks().to_vec(),
            bounds: None,
        }
    }

    /// Captures a scale axis together with its computed bounds.
    #[must_use]
    pub fn capture_with_bounds(axis: &dyn Axis, bounds: &Bounds) -> Self {
        let mut snapshot = Self::capture(axis);
        snapshot.bounds = Some(bounds.clone());
        snapshot
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("snapshot deserialization failed: {err}")))
    }
}
