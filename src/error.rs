use std::fmt::{Display, Formatter};

use derive_more::with_trait::IsVariant;
use thiserror::Error;

use crate::math::{Dimensions, Point};

/// One of the two grid axes, used to report which dimension was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(IsVariant)]
pub enum Axis {
    Width,
    Height,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{axis} must not be negative, got {value}")]
    NegativeDimension { axis: Axis, value: isize },
    #[error("a {width}x{height} grid is too large to address")]
    TooLarge { width: usize, height: usize },
    #[error("point {point} is outside of a {}x{} grid", .dims.width, .dims.height)]
    OutOfBounds { point: Point, dims: Dimensions },
}
