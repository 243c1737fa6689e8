use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::path::parse::parse_elements;

/// Path command kind, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathCommand {
    Move,
    Line,
    Curve,
    Arc,
}

/// One drawing command with its numeric parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Move {
        x: f64,
        y: f64,
    },
    Line {
        x: f64,
        y: f64,
    },
    Curve {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
}

impl Segment {
    #[must_use]
    pub fn command(&self) -> PathCommand {
        match self {
            Self::Move { .. } => PathCommand::Move,
            Self::Line { .. } => PathCommand::Line,
            Self::Curve { .. } => PathCommand::Curve,
            Self::Arc { .. } => PathCommand::Arc,
        }
    }

    fn letter(&self, relative: bool) -> char {
        let absolute = match self.command() {
            PathCommand::Move => 'M',
            PathCommand::Line => 'L',
            PathCommand::Curve => 'C',
            PathCommand::Arc => 'A',
        };
        if relative {
            absolute.to_ascii_lowercase()
        } else {
            absolute
        }
    }

    /// End coordinate of the command.
    #[must_use]
    pub fn end_point(&self) -> (f64, f64) {
        match *self {
            Self::Move { x, y }
            | Self::Line { x, y }
            | Self::Curve { x, y, .. }
            | Self::Arc { x, y, .. } => (x, y),
        }
    }
}

/// Which coordinate family a path parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordAxis {
    X,
    Y,
}

/// One element of a path: a command, its addressing mode, and optionally the
/// source datum the element was produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement<D> {
    pub segment: Segment,
    pub relative: bool,
    pub data: Option<D>,
}

/// Serialization options for `Path::stringify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFormat {
    /// Decimal places kept in the output; `None` emits full precision.
    pub accuracy: Option<u32>,
}

impl Default for PathFormat {
    fn default() -> Self {
        Self { accuracy: Some(3) }
    }
}

/// Ordered, cursor-addressable sequence of path elements.
///
/// Inserting and removing always happens at the cursor; the cursor stays
/// within `[0, len]`. `D` is opaque per-element data carried through
/// untouched so consumers can trace geometry back to its source datum.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<D> {
    elements: Vec<PathElement<D>>,
    position: usize,
    closed: bool,
    format: PathFormat,
}

impl<D> Default for Path<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Path<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            position: 0,
            closed: false,
            format: PathFormat::default(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: PathFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn format(&self) -> PathFormat {
        self.format
    }

    #[must_use]
    pub fn elements(&self) -> &[PathElement<D>] {
        &self.elements
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor, clamping to `[0, len]`.
    pub fn set_position(&mut self, position: usize) -> &mut Self {
        self.position = position.min(self.elements.len());
        self
    }

    fn insert(&mut self, segment: Segment, relative: bool, data: Option<D>) -> &mut Self {
        self.elements.insert(
            self.position,
            PathElement {
                segment,
                relative,
                data,
            },
        );
        self.position += 1;
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64, relative: bool, data: Option<D>) -> &mut Self {
        self.insert(Segment::Move { x, y }, relative, data)
    }

    pub fn line_to(&mut self, x: f64, y: f64, relative: bool, data: Option<D>) -> &mut Self {
        self.insert(Segment::Line { x, y }, relative, data)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
        data: Option<D>,
    ) -> &mut Self {
        self.insert(
            Segment::Curve {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            relative,
            data,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
        data: Option<D>,
    ) -> &mut Self {
        self.insert(
            Segment::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            },
            relative,
            data,
        )
    }

    /// Deletes up to `count` elements starting at the cursor.
    pub fn remove(&mut self, count: usize) -> &mut Self {
        let end = self.position.saturating_add(count).min(self.elements.len());
        self.elements.drain(self.position..end);
        self
    }

    /// Tokenizes a path description and splices its commands in at the
    /// cursor. Closing markers are dropped; closure is tracked by the
    /// `closed` flag instead.
    pub fn parse(&mut self, description: &str) -> ChartResult<&mut Self> {
        let parsed = parse_elements(description)?;
        for (segment, relative) in parsed {
            self.insert(segment, relative, None);
        }
        Ok(self)
    }

    /// Renders the path to a description string.
    ///
    /// Pure and repeatable; numbers are rounded to the configured accuracy.
    #[must_use]
    pub fn stringify(&self) -> String {
        let mut out = String::with_capacity(self.elements.len() * 16);
        for element in &self.elements {
            out.push(element.segment.letter(element.relative));
            match element.segment {
                Segment::Move { x, y } | Segment::Line { x, y } => {
                    self.write_number(&mut out, x);
                    out.push(',');
                    self.write_number(&mut out, y);
                }
                Segment::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    for (index, value) in [x1, y1, x2, y2, x, y].into_iter().enumerate() {
                        if index > 0 {
                            out.push(',');
                        }
                        self.write_number(&mut out, value);
                    }
                }
                Segment::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => {
                    let large_arc = if large_arc { 1.0 } else { 0.0 };
                    let sweep = if sweep { 1.0 } else { 0.0 };
                    let params = [rx, ry, rotation, large_arc, sweep, x, y];
                    for (index, value) in params.into_iter().enumerate() {
                        if index > 0 {
                            out.push(',');
                        }
                        self.write_number(&mut out, value);
                    }
                }
            }
        }
        if self.closed {
            out.push('Z');
        }
        out
    }

    fn write_number(&self, out: &mut String, value: f64) {
        let rounded = match self.format.accuracy {
            Some(digits) => {
                let pow = 10f64.powi(digits as i32);
                (value * pow).round() / pow
            }
            None => value,
        };
        let _ = write!(out, "{rounded}");
    }

    /// Partitions the element sequence into sub-paths, starting a new one
    /// each time `command` recurs.
    #[must_use]
    pub fn split_by_command(&self, command: PathCommand) -> Vec<Path<D>>
    where
        D: Clone,
    {
        let mut split = vec![self.empty_like()];
        for element in &self.elements {
            if element.segment.command() == command
                && split.last().is_some_and(|path| !path.is_empty())
            {
                split.push(self.empty_like());
            }
            if let Some(current) = split.last_mut() {
                current.elements.push(element.clone());
                current.position = current.elements.len();
            }
        }
        split
    }

    fn empty_like(&self) -> Path<D> {
        Path {
            elements: Vec::new(),
            position: 0,
            closed: self.closed,
            format: self.format,
        }
    }

    /// Concatenates the element sequences of `paths`, preserving order.
    ///
    /// Format and closed state are inherited from the first path.
    #[must_use]
    pub fn join(paths: Vec<Path<D>>) -> Path<D> {
        let mut iter = paths.into_iter();
        let Some(mut joined) = iter.next() else {
            return Path::new();
        };
        for path in iter {
            joined.elements.extend(path.elements);
        }
        joined.position = joined.elements.len();
        joined
    }

    /// Deep copy with an explicit closed flag.
    #[must_use]
    pub fn clone_with_close(&self, closed: bool) -> Path<D>
    where
        D: Clone,
    {
        let mut cloned = self.clone();
        cloned.closed = closed;
        cloned
    }

    /// Multiplies every x coordinate by `x` and every y coordinate by `y`.
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform(|axis, value| {
            Some(match axis {
                CoordAxis::X => value * x,
                CoordAxis::Y => value * y,
            })
        })
    }

    /// Shifts every x coordinate by `x` and every y coordinate by `y`.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform(|axis, value| {
            Some(match axis {
                CoordAxis::X => value + x,
                CoordAxis::Y => value + y,
            })
        })
    }

    /// Visits every coordinate parameter of every element. The callback
    /// returns the replacement value, or `None` to keep the current one.
    ///
    /// Arc radii and rotation are not coordinates and are not visited.
    pub fn transform<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(CoordAxis, f64) -> Option<f64>,
    {
        for element in &mut self.elements {
            match &mut element.segment {
                Segment::Move { x, y } | Segment::Line { x, y } | Segment::Arc { x, y, .. } => {
                    apply(&mut callback, CoordAxis::X, x);
                    apply(&mut callback, CoordAxis::Y, y);
                }
                Segment::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    apply(&mut callback, CoordAxis::X, x1);
                    apply(&mut callback, CoordAxis::Y, y1);
                    apply(&mut callback, CoordAxis::X, x2);
                    apply(&mut callback, CoordAxis::Y, y2);
                    apply(&mut callback, CoordAxis::X, x);
                    apply(&mut callback, CoordAxis::Y, y);
                }
            }
        }
        self
    }
}

fn apply<F>(callback: &mut F, axis: CoordAxis, value: &mut f64)
where
    F: FnMut(CoordAxis, f64) -> Option<f64>,
{
    if let Some(updated) = callback(axis, *value) {
        *value = updated;
    }
}
