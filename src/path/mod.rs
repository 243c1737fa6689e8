mod model;
mod parse;

pub use model::{CoordAxis, Path, PathCommand, PathElement, PathFormat, Segment};
