mod axis;
mod bounds;

pub use axis::{
    AutoScaleAxis, Axis, AxisDimension, AxisOptions, FixedScaleAxis, LinearScaleAxis, StepAxis,
    ValueRange,
};
pub use bounds::{Bounds, HighLow, compute_bounds};
