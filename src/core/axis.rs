use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::bounds::{Bounds, HighLow, compute_bounds};
use crate::error::{ChartError, ChartResult};

/// Chart dimension an axis projects along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDimension {
    X,
    Y,
}

impl AxisDimension {
    /// The perpendicular dimension.
    #[must_use]
    pub fn counter(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Value range an axis spans, in domain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Construction options shared by the axis variants.
///
/// Variants read the fields that apply to them and ignore the rest, so one
/// options value can drive both axes of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    /// Minimum pixel spacing between two scale ticks.
    pub scale_min_space: f64,
    /// Restrict scale steps to integers.
    pub only_integer: bool,
    /// Value guaranteed to stay inside the projected range (commonly 0 for
    /// bipolar charts).
    pub reference_value: Option<f64>,
    /// Value guaranteed to land on a tick exactly.
    pub ensure_tick_value: Option<f64>,
    /// Step axes: consume the full axis length instead of centering slots.
    pub stretch: bool,
    /// Fixed-scale axes: number of evenly spaced ticks to generate.
    pub divisor: Option<usize>,
    /// Fixed-scale axes: explicit tick list.
    pub ticks: Option<Vec<f64>>,
    /// Explicit envelope overrides.
    pub high: Option<f64>,
    pub low: Option<f64>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            scale_min_space: 20.0,
            only_integer: false,
            reference_value: None,
            ensure_tick_value: None,
            stretch: false,
            divisor: None,
            ticks: None,
            high: None,
            low: None,
        }
    }
}

impl AxisOptions {
    fn resolve_envelope(&self, high_low: HighLow) -> HighLow {
        HighLow {
            high: self.high.unwrap_or(high_low.high),
            low: self.low.unwrap_or(high_low.low),
        }
    }
}

/// Projector over one chart dimension.
///
/// Offsets returned by `project_value` are counted from the axis's own
/// origin; callers add grid offsets and flip directions themselves.
pub trait Axis {
    fn dimension(&self) -> AxisDimension;
    fn axis_length(&self) -> f64;
    fn ticks(&self) -> &[f64];
    fn range(&self) -> ValueRange;
    fn project_value(&self, value: f64, index: usize) -> f64;
}

fn validate_axis_length(axis_length: f64) -> ChartResult<f64> {
    if !axis_length.is_finite() || axis_length <= 0.0 {
        return Err(ChartError::InvalidAxisLength {
            length: axis_length,
        });
    }
    Ok(axis_length)
}

/// Projects `value` through a min/span scale, falling back to the axis
/// midpoint when the span collapsed to zero.
fn project_scaled(value: f64, min: f64, span: f64, axis_length: f64) -> f64 {
    if span == 0.0 {
        axis_length / 2.0
    } else {
        (value - min) / span * axis_length
    }
}

/// Scale axis whose bounds are derived from the data envelope, driven by the
/// minimum tick spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScaleAxis {
    dimension: AxisDimension,
    axis_length: f64,
    bounds: Bounds,
}

impl AutoScaleAxis {
    pub fn new(
        dimension: AxisDimension,
        axis_length: f64,
        high_low: HighLow,
        options: &AxisOptions,
    ) -> ChartResult<Self> {
        let envelope = options.resolve_envelope(high_low);
        let bounds = compute_bounds(
            axis_length,
            envelope,
            options.scale_min_space,
            options.only_integer,
        )?;
        debug!(?dimension, step = bounds.step, "auto scale axis constructed");
        Ok(Self {
            dimension,
            axis_length,
            bounds,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

impl Axis for AutoScaleAxis {
    fn dimension(&self) -> AxisDimension {
        self.dimension
    }

    fn axis_length(&self) -> f64 {
        self.axis_length
    }

    fn ticks(&self) -> &[f64] {
        &self.bounds.values
    }

    fn range(&self) -> ValueRange {
        ValueRange {
            min: self.bounds.min,
            max: self.bounds.max,
        }
    }

    fn project_value(&self, value: f64, _index: usize) -> f64 {
        project_scaled(value, self.bounds.min, self.bounds.range, self.axis_length)
    }
}

/// Value-axis workhorse for bar/line charts: computed bounds that honor a
/// reference value and an ensured tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScaleAxis {
    dimension: AxisDimension,
    axis_length: f64,
    bounds: Bounds,
}

impl LinearScaleAxis {
    pub fn new(
        dimension: AxisDimension,
        axis_length: f64,
        high_low: HighLow,
        options: &AxisOptions,
    ) -> ChartResult<Self> {
        let mut envelope = options.resolve_envelope(high_low);
        if let Some(reference) = options.reference_value {
            envelope = envelope.including(reference);
        }

        let mut bounds = compute_bounds(
            axis_length,
            envelope,
            options.scale_min_space,
            options.only_integer,
        )?;
        if let Some(ensured) = options.ensure_tick_value {
            bounds.ensure_value(ensured);
        }
        debug!(
            ?dimension,
            step = bounds.step,
            "linear scale axis constructed"
        );
        Ok(Self {
            dimension,
            axis_length,
            bounds,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

impl Axis for LinearScaleAxis {
    fn dimension(&self) -> AxisDimension {
        self.dimension
    }

    fn axis_length(&self) -> f64 {
        self.axis_length
    }

    fn ticks(&self) -> &[f64] {
        &self.bounds.values
    }

    fn range(&self) -> ValueRange {
        ValueRange {
            min: self.bounds.min,
            max: self.bounds.max,
        }
    }

    fn project_value(&self, value: f64, _index: usize) -> f64 {
        project_scaled(value, self.bounds.min, self.bounds.range, self.axis_length)
    }
}

/// Scale axis over a caller-supplied tick list, or ticks generated by evenly
/// dividing the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedScaleAxis {
    dimension: AxisDimension,
    axis_length: f64,
    ticks: Vec<f64>,
    range: ValueRange,
}

impl FixedScaleAxis {
    pub fn new(
        dimension: AxisDimension,
        axis_length: f64,
        high_low: HighLow,
        options: &AxisOptions,
    ) -> ChartResult<Self> {
        let axis_length = validate_axis_length(axis_length)?;
        let envelope = options.resolve_envelope(high_low).normalized();

        let (ticks, range) = match &options.ticks {
            Some(explicit) if !explicit.is_empty() => {
                let mut ticks = explicit.clone();
                if ticks.iter().any(|tick| !tick.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "fixed scale ticks must be finite".to_owned(),
                    ));
                }
                ticks.sort_unstable_by_key(|tick| OrderedFloat(*tick));
                ticks.dedup();
                let range = ValueRange {
                    min: ticks[0],
                    max: ticks[ticks.len() - 1],
                };
                (ticks, range)
            }
            _ => {
                let divisor = options.divisor.unwrap_or(1).max(1);
                let span = envelope.high - envelope.low;
                let ticks = (0..divisor)
                    .map(|index| envelope.low + span / divisor as f64 * index as f64)
                    .collect();
                (
                    ticks,
                    ValueRange {
                        min: envelope.low,
                        max: envelope.high,
                    },
                )
            }
        };

        if ticks.is_empty() {
            return Err(ChartError::InvalidData(
                "fixed scale axis requires at least one tick".to_owned(),
            ));
        }

        Ok(Self {
            dimension,
            axis_length,
            ticks,
            range,
        })
    }
}

impl Axis for FixedScaleAxis {
    fn dimension(&self) -> AxisDimension {
        self.dimension
    }

    fn axis_length(&self) -> f64 {
        self.axis_length
    }

    fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    fn range(&self) -> ValueRange {
        self.range
    }

    fn project_value(&self, value: f64, _index: usize) -> f64 {
        project_scaled(value, self.range.min, self.range.span(), self.axis_length)
    }
}

/// Category axis: evenly divides the axis length into one slot per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StepAxis {
    dimension: AxisDimension,
    axis_length: f64,
    ticks: Vec<f64>,
    stretch: bool,
}

impl StepAxis {
    pub fn new(
        dimension: AxisDimension,
        axis_length: f64,
        tick_count: usize,
        options: &AxisOptions,
    ) -> ChartResult<Self> {
        let axis_length = validate_axis_length(axis_length)?;
        let ticks = (0..tick_count).map(|index| index as f64).collect();
        Ok(Self {
            dimension,
            axis_length,
            ticks,
            stretch: options.stretch,
        })
    }

    /// Pixel length of one category slot.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        let slots = if self.stretch {
            self.ticks.len().saturating_sub(1)
        } else {
            self.ticks.len()
        };
        self.axis_length / slots.max(1) as f64
    }
}

impl Axis for StepAxis {
    fn dimension(&self) -> AxisDimension {
        self.dimension
    }

    fn axis_length(&self) -> f64 {
        self.axis_length
    }

    fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    fn range(&self) -> ValueRange {
        ValueRange {
            min: 0.0,
            max: self.ticks.len().saturating_sub(1) as f64,
        }
    }

    fn project_value(&self, _value: f64, index: usize) -> f64 {
        if self.stretch {
            self.step_length() * index as f64
        } else {
            // Half-step margin on both ends centers each category slot.
            self.step_length() * (index as f64 + 0.5)
        }
    }
}
