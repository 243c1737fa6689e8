//! Curve interpolation over projected point sequences.
//!
//! Every algorithm is a pure function from projected points to a [`Path`].
//! Missing values split the sequence into independently interpolated
//! segments so gaps never produce connecting geometry; `fill_holes` bridges
//! them instead. Emitted on-curve elements carry their source
//! [`SegmentData`] for draw-event traceability.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::path::Path;

/// Metadata attached 1:1 to each projected point.
///
/// `value` is the original series value, `None` marking a missing datum.
/// `meta` is opaque caller payload passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData<M> {
    pub value: Option<f64>,
    pub index: usize,
    pub meta: M,
}

/// One series point projected into pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint<M> {
    pub x: f64,
    pub y: f64,
    pub data: SegmentData<M>,
}

/// Path whose elements trace back to series data.
pub type SeriesPath<M> = Path<SegmentData<M>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoneOptions {
    pub fill_holes: bool,
}

impl Default for NoneOptions {
    fn default() -> Self {
        Self { fill_holes: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleOptions {
    /// Fraction of the x distance used as control point offset.
    pub divisor: f64,
    pub fill_holes: bool,
}

impl Default for SimpleOptions {
    fn default() -> Self {
        Self {
            divisor: 2.0,
            fill_holes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOptions {
    /// Reach the new x before stepping to the new y.
    pub postpone: bool,
    pub fill_holes: bool,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            postpone: true,
            fill_holes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardinalOptions {
    /// Blend between the spline tangent (1) and the straight chord (0).
    pub tension: f64,
    pub fill_holes: bool,
}

impl Default for CardinalOptions {
    fn default() -> Self {
        Self {
            tension: 1.0,
            fill_holes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonotoneCubicOptions {
    pub fill_holes: bool,
}

impl Default for MonotoneCubicOptions {
    fn default() -> Self {
        Self { fill_holes: false }
    }
}

/// Polyline: move plus one line per consecutive pair.
pub fn none<M: Clone>(points: &[ProjectedPoint<M>], options: &NoneOptions) -> SeriesPath<M> {
    interpolate_segments(points, options.fill_holes, false, none_segment)
}

/// Cubic smoothing without overshoot: control points are horizontally offset
/// from the endpoints by the pair's x distance over `divisor`.
pub fn simple<M: Clone>(points: &[ProjectedPoint<M>], options: &SimpleOptions) -> SeriesPath<M> {
    let divisor = options.divisor.max(1.0);
    interpolate_segments(points, options.fill_holes, false, |segment| {
        simple_segment(segment, divisor)
    })
}

/// Staircase: two right-angle lines per consecutive pair.
pub fn step<M: Clone>(points: &[ProjectedPoint<M>], options: &StepOptions) -> SeriesPath<M> {
    interpolate_segments(points, options.fill_holes, false, |segment| {
        step_segment(segment, options.postpone)
    })
}

/// Catmull-Rom spline converted to cubic Bezier segments.
///
/// Segments with fewer than three points fall back to [`none`].
pub fn cardinal<M: Clone>(
    points: &[ProjectedPoint<M>],
    options: &CardinalOptions,
) -> SeriesPath<M> {
    let tension = options.tension.clamp(0.0, 1.0);
    interpolate_segments(points, options.fill_holes, false, |segment| {
        cardinal_segment(segment, tension)
    })
}

/// Fritsch-Carlson monotone cubic interpolation.
///
/// Tangents are damped at local extrema so the curve never overshoots the
/// data. A non-increasing x splits the run regardless of `fill_holes`, since
/// a monotone fit is undefined for non-monotonic x. Segments with fewer than
/// three points fall back to [`none`].
pub fn monotone_cubic<M: Clone>(
    points: &[ProjectedPoint<M>],
    options: &MonotoneCubicOptions,
) -> SeriesPath<M> {
    interpolate_segments(points, options.fill_holes, true, monotone_segment)
}

/// Shared preprocessing: interpolates each maximal run of non-missing points
/// independently and joins the per-segment paths.
fn interpolate_segments<M, F>(
    points: &[ProjectedPoint<M>],
    fill_holes: bool,
    increasing_x: bool,
    mut segment_fn: F,
) -> SeriesPath<M>
where
    M: Clone,
    F: FnMut(&[&ProjectedPoint<M>]) -> SeriesPath<M>,
{
    let segments = split_segments(points, fill_holes, increasing_x);
    if segments.is_empty() {
        return Path::new();
    }

    let paths = segments
        .iter()
        .map(|segment| {
            let gathered: Vec<&ProjectedPoint<M>> =
                segment.iter().map(|&index| &points[index]).collect();
            segment_fn(gathered.as_slice())
        })
        .collect();
    Path::join(paths)
}

/// Partitions `points` into maximal runs of non-missing points.
///
/// `fill_holes` skips missing points without breaking the run. With
/// `increasing_x`, a point whose x does not exceed the last kept point's x
/// also starts a new run.
fn split_segments<M>(
    points: &[ProjectedPoint<M>],
    fill_holes: bool,
    increasing_x: bool,
) -> SmallVec<[Vec<usize>; 4]> {
    let mut segments: SmallVec<[Vec<usize>; 4]> = SmallVec::new();
    let mut hole = true;

    for (index, point) in points.iter().enumerate() {
        if point.data.value.is_none() {
            if !fill_holes {
                hole = true;
            }
            continue;
        }

        if increasing_x && !hole {
            if let Some(&last_kept) = segments.last().and_then(|segment| segment.last()) {
                if point.x <= points[last_kept].x {
                    hole = true;
                }
            }
        }

        if hole {
            segments.push(Vec::new());
            hole = false;
        }
        if let Some(current) = segments.last_mut() {
            current.push(index);
        }
    }

    trace!(
        points = points.len(),
        segments = segments.len(),
        fill_holes,
        "split series into segments"
    );
    segments
}

fn none_segment<M: Clone>(points: &[&ProjectedPoint<M>]) -> SeriesPath<M> {
    let mut path = Path::new();
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            path.move_to(point.x, point.y, false, Some(point.data.clone()));
        } else {
            path.line_to(point.x, point.y, false, Some(point.data.clone()));
        }
    }
    path
}

fn simple_segment<M: Clone>(points: &[&ProjectedPoint<M>], divisor: f64) -> SeriesPath<M> {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(first.x, first.y, false, Some(first.data.clone()));

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let offset = (curr.x - prev.x) / divisor;
        path.curve_to(
            prev.x + offset,
            prev.y,
            curr.x - offset,
            curr.y,
            curr.x,
            curr.y,
            false,
            Some(curr.data.clone()),
        );
    }
    path
}

fn step_segment<M: Clone>(points: &[&ProjectedPoint<M>], postpone: bool) -> SeriesPath<M> {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(first.x, first.y, false, Some(first.data.clone()));

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        // The corner is a drawable point itself; it inherits the datum of
        // whichever endpoint its y belongs to.
        if postpone {
            path.line_to(curr.x, prev.y, false, Some(prev.data.clone()));
        } else {
            path.line_to(prev.x, curr.y, false, Some(curr.data.clone()));
        }
        path.line_to(curr.x, curr.y, false, Some(curr.data.clone()));
    }
    path
}

fn cardinal_segment<M: Clone>(points: &[&ProjectedPoint<M>], tension: f64) -> SeriesPath<M> {
    if points.len() < 3 {
        return none_segment(points);
    }

    let t = tension;
    let c = 1.0 - t;
    let count = points.len();

    let mut path = Path::new();
    path.move_to(
        points[0].x,
        points[0].y,
        false,
        Some(points[0].data.clone()),
    );

    for k in 0..count - 1 {
        // Boundary points are duplicated to provide tangents at path ends.
        let p0 = if k == 0 { points[0] } else { points[k - 1] };
        let p1 = points[k];
        let p2 = points[k + 1];
        let p3 = if k + 2 < count { points[k + 2] } else { p2 };

        path.curve_to(
            t * (-p0.x + 6.0 * p1.x + p2.x) / 6.0 + c * p2.x,
            t * (-p0.y + 6.0 * p1.y + p2.y) / 6.0 + c * p2.y,
            t * (p1.x + 6.0 * p2.x - p3.x) / 6.0 + c * p2.x,
            t * (p1.y + 6.0 * p2.y - p3.y) / 6.0 + c * p2.y,
            p2.x,
            p2.y,
            false,
            Some(p2.data.clone()),
        );
    }
    path
}

fn monotone_segment<M: Clone>(points: &[&ProjectedPoint<M>]) -> SeriesPath<M> {
    if points.len() < 3 {
        return none_segment(points);
    }

    let count = points.len();
    let mut dxs = vec![0.0; count - 1];
    let mut secants = vec![0.0; count - 1];
    for i in 0..count - 1 {
        dxs[i] = points[i + 1].x - points[i].x;
        secants[i] = (points[i + 1].y - points[i].y) / dxs[i];
    }

    let mut tangents = vec![0.0; count];
    tangents[0] = secants[0];
    tangents[count - 1] = secants[count - 2];
    for i in 1..count - 1 {
        if secants[i] == 0.0
            || secants[i - 1] == 0.0
            || (secants[i - 1] > 0.0) != (secants[i] > 0.0)
        {
            // Adjacent secants disagree: this is a local extremum and a flat
            // tangent is the only monotonicity-preserving choice.
            tangents[i] = 0.0;
        } else {
            tangents[i] = 3.0 * (dxs[i - 1] + dxs[i])
                / ((2.0 * dxs[i] + dxs[i - 1]) / secants[i - 1]
                    + (dxs[i] + 2.0 * dxs[i - 1]) / secants[i]);
            if !tangents[i].is_finite() {
                tangents[i] = 0.0;
            }
        }
    }

    let mut path = Path::new();
    path.move_to(
        points[0].x,
        points[0].y,
        false,
        Some(points[0].data.clone()),
    );
    for i in 0..count - 1 {
        path.curve_to(
            points[i].x + dxs[i] / 3.0,
            points[i].y + tangents[i] * dxs[i] / 3.0,
            points[i + 1].x - dxs[i] / 3.0,
            points[i + 1].y - tangents[i + 1] * dxs[i] / 3.0,
            points[i + 1].x,
            points[i + 1].y,
            false,
            Some(points[i + 1].data.clone()),
        );
    }
    path
}
