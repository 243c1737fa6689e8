//! chartpath: vector-path charting core.
//!
//! This crate turns raw numeric series into drawable vector path description
//! strings. It covers the scale/projection math and the path geometry layer
//! of a charting stack; element creation, layout, and event wiring live in
//! embedding layers.
//!
//! The pipeline: a [`core::Axis`] variant derives tick steps and value
//! ranges (via [`core::compute_bounds`]) and projects domain values to pixel
//! offsets; [`interpolation`] turns the projected points into smooth or
//! stepped curve geometry; [`path::Path`] holds that geometry as an editable
//! command sequence and serializes it.

pub mod core;
pub mod diagnostics;
pub mod error;
pub mod interpolation;
pub mod path;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use path::{Path, PathCommand};
