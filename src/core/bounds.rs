use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// Decimal precision used when materializing tick values.
const VALUE_PRECISION: u32 = 8;

/// Upper limit on refinement iterations before the step search is declared stuck.
const MAX_REFINEMENT_ITERATIONS: u32 = 1_000;

/// Upper limit on materialized ticks for a single axis.
const MAX_TICKS: usize = 100_000;

/// Raw value envelope of a series, before any normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

impl HighLow {
    #[must_use]
    pub fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }

    /// Widens the envelope so `value` is inside it.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        Self {
            high: self.high.max(value),
            low: self.low.min(value),
        }
    }

    /// Resolves a flat envelope into a projectable one.
    ///
    /// A zero-width envelope cannot be projected, so the side that keeps the
    /// data visible is pushed to zero (or `high` to one when both are zero).
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.high != self.low {
            return self;
        }

        if self.low == 0.0 {
            Self {
                high: 1.0,
                low: 0.0,
            }
        } else if self.low < 0.0 {
            Self {
                high: 0.0,
                low: self.low,
            }
        } else {
            Self {
                high: self.high,
                low: 0.0,
            }
        }
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.high.is_finite() || !self.low.is_finite() {
            return Err(ChartError::InvalidData(
                "high/low envelope must be finite".to_owned(),
            ));
        }
        if self.high < self.low {
            return Err(ChartError::InvalidData(
                "high/low envelope must satisfy high >= low".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Computed numeric range, tick step, and tick list for one axis.
///
/// Invariants: `min <= low <= high <= max`, `step > 0`, and `values` is the
/// ascending tick sequence from `min` to `max` stepping by `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
    pub value_range: f64,
    pub order_of_magnitude: i32,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub step: f64,
    pub number_of_steps: usize,
    pub values: Vec<f64>,
}

impl Bounds {
    /// Pixel length the current step occupies on an axis of `axis_length` pixels.
    #[must_use]
    pub fn projected_step(&self, axis_length: f64) -> f64 {
        project_length(axis_length, self.step, self.range)
    }

    /// Extends the bounds so `value` lies on a tick exactly.
    ///
    /// The range only ever grows and the step lattice is re-anchored on
    /// `value` when the existing lattice misses it.
    pub(crate) fn ensure_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }

        if self.min > value {
            self.min -= ((self.min - value) / self.step).ceil() * self.step;
        }
        if self.max < value {
            self.max += ((value - self.max) / self.step).ceil() * self.step;
        }

        let offset_steps = (value - self.min) / self.step;
        if round_with_precision(offset_steps - offset_steps.round()) != 0.0 {
            // Value is off the lattice: re-anchor on it, keeping min/max coverage.
            self.min = value - ((value - self.min) / self.step).ceil() * self.step;
            self.max = value + ((self.max - value) / self.step).ceil() * self.step;
        }

        self.range = self.max - self.min;
        self.number_of_steps = (self.range / self.step).round() as usize;
        self.values = materialize_values(self.min, self.max, self.step);
    }
}

/// Derives human-readable tick steps and value ranges for an axis.
///
/// The initial step is the order of magnitude of the value range; it is then
/// halved while the halved step still projects to at least `scale_min_space`
/// pixels, or doubled while the current step projects below it. With
/// `only_integer` the step never drops below one and prefers integer factors
/// of the range.
pub fn compute_bounds(
    axis_length: f64,
    high_low: HighLow,
    scale_min_space: f64,
    only_integer: bool,
) -> ChartResult<Bounds> {
    if !axis_length.is_finite() || axis_length <= 0.0 {
        return Err(ChartError::InvalidAxisLength {
            length: axis_length,
        });
    }

    let HighLow { high, low } = high_low.validate()?.normalized();
    // A degenerate spacing request would otherwise let the halving loop run
    // until the step underflows.
    let scale_min_space = if scale_min_space.is_finite() && scale_min_space > 0.0 {
        scale_min_space
    } else {
        1.0
    };

    let value_range = high - low;
    let order_of_magnitude = value_range.abs().log10().floor() as i32;

    let mut step = 10f64.powi(order_of_magnitude);
    let min = (low / step).floor() * step;
    let max = (high / step).ceil() * step;
    let range = max - min;

    let scale_up = project_length(axis_length, step, range) < scale_min_space;
    let smallest_factor = if only_integer {
        smallest_integer_factor(range)
    } else {
        0.0
    };

    if only_integer && project_length(axis_length, 1.0, range) >= scale_min_space {
        step = 1.0;
    } else if only_integer
        && smallest_factor < step
        && project_length(axis_length, smallest_factor, range) >= scale_min_space
    {
        step = smallest_factor;
    } else {
        let mut iterations = 0u32;
        loop {
            if scale_up && project_length(axis_length, step, range) <= scale_min_space {
                step *= 2.0;
            } else if !scale_up
                && project_length(axis_length, step / 2.0, range) >= scale_min_space
            {
                step /= 2.0;
                if only_integer && step.fract() != 0.0 {
                    step *= 2.0;
                    break;
                }
            } else {
                break;
            }

            iterations += 1;
            if iterations > MAX_REFINEMENT_ITERATIONS {
                return Err(ChartError::InvalidData(
                    "exceeded maximum number of iterations while optimizing scale step"
                        .to_owned(),
                ));
            }
        }
        trace!(step, iterations, "scale step refinement settled");
    }

    step = step.max(f64::EPSILON);

    // Narrow min and max inward by whole steps without excluding the data.
    let mut narrowed_min = min;
    let mut narrowed_max = max;
    while narrowed_min + step <= low {
        narrowed_min = safe_increment(narrowed_min, step);
    }
    while narrowed_max - step >= high {
        narrowed_max = safe_increment(narrowed_max, -step);
    }

    let range = narrowed_max - narrowed_min;
    let values = materialize_values(narrowed_min, narrowed_max, step);

    debug!(
        low,
        high,
        step,
        min = narrowed_min,
        max = narrowed_max,
        ticks = values.len(),
        "computed axis bounds"
    );

    Ok(Bounds {
        low,
        high,
        value_range,
        order_of_magnitude,
        min: narrowed_min,
        max: narrowed_max,
        range,
        step,
        number_of_steps: (range / step).round() as usize,
        values,
    })
}

/// Pixel length that `length` value units occupy on the axis.
fn project_length(axis_length: f64, length: f64, range: f64) -> f64 {
    axis_length / range * length
}

/// Ascending tick sequence from `min` to `max` stepping by `step`.
fn materialize_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut current = min;
    while current <= max {
        let value = round_with_precision(current);
        if values.last() != Some(&value) {
            values.push(value);
        }
        current = safe_increment(current, step);
        if values.len() >= MAX_TICKS {
            trace!(step, "tick materialization hit the tick cap");
            break;
        }
    }
    values
}

/// Advances `value` by `increment`, nudging multiplicatively when the
/// increment vanishes in floating point.
fn safe_increment(value: f64, increment: f64) -> f64 {
    let next = value + increment;
    if next == value {
        value
            * (1.0
                + if increment > 0.0 {
                    f64::EPSILON
                } else {
                    -f64::EPSILON
                })
    } else {
        next
    }
}

fn round_with_precision(value: f64) -> f64 {
    let pow = 10f64.powi(VALUE_PRECISION as i32);
    (value * pow).round() / pow
}

/// Smallest integer factor of `range`, used to seed integer-only steps.
fn smallest_integer_factor(range: f64) -> f64 {
    let n = range.abs().round() as u64;
    if n < 2 {
        return range.max(1.0);
    }

    let mut factor = 2u64;
    while factor * factor <= n {
        if n % factor == 0 {
            return factor as f64;
        }
        factor += 1;
    }
    n as f64
}
