use crate::{
    error::{Axis, GridError},
    math::{Point, PointTy},
};

/// 2D dimensions with a width and a height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Dimensions { width, height }
    }

    /// Validates signed input. Zero is allowed on either axis, negative values
    /// are not.
    pub fn try_new(width: isize, height: isize) -> Result<Self, GridError> {
        let width = usize::try_from(width)
            .map_err(|_| GridError::NegativeDimension { axis: Axis::Width, value: width })?;
        let height = usize::try_from(height)
            .map_err(|_| GridError::NegativeDimension { axis: Axis::Height, value: height })?;
        Ok(Dimensions { width, height })
    }

    pub const fn width(self) -> usize {
        self.width
    }

    pub const fn height(self) -> usize {
        self.height
    }

    /// `width * height`, or `None` if that doesn't fit in `usize`.
    pub const fn checked_area(self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Panics on overflow, see [`checked_area`][`Self::checked_area`].
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Whether every cell can be addressed by a [`Point`] and the cell count
    /// fits in `usize`.
    pub const fn is_addressable(self) -> bool {
        self.width <= PointTy::MAX as usize
            && self.height <= PointTy::MAX as usize
            && self.checked_area().is_some()
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(self, point: Point) -> bool {
        point.x >= 0
            && (point.x as usize) < self.width
            && point.y >= 0
            && (point.y as usize) < self.height
    }

    /// Iterates points within this rectangle, row by row.
    /// For yielded points, `0 <= x < self.width` and `0 <= y < self.height`.
    pub const fn iter_within(self) -> DimensionsIter {
        DimensionsIter::new(self)
    }
}

/// Iterates exclusively - yielded values are never equal to the x or y of
/// `dims`
pub struct DimensionsIter {
    dims: Dimensions,
    current: Point,
}

impl DimensionsIter {
    pub const fn new(dims: Dimensions) -> Self {
        DimensionsIter { dims, current: Point::new(0, 0) }
    }
}

impl Iterator for DimensionsIter {
    type Item = Point;
    fn next(&mut self) -> Option<Self::Item> {
        // A zero width would otherwise yield (0, y) for every row
        if self.dims.is_empty() || !self.dims.contains(self.current) {
            return None;
        }
        let val = self.current;

        // Step x, step y and reset x if out of bounds
        self.current.x += 1;
        if self.current.x as usize >= self.dims.width {
            self.current.x = 0;
            self.current.y += 1;
        }

        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || !self.dims.contains(self.current) {
            return (0, Some(0));
        }
        // `current` is inside, so its flat index is below the area and can't overflow
        let Some(area) = self.dims.checked_area() else {
            return (usize::MAX, None);
        };
        let remaining = area - (self.current.y as usize * self.dims.width + self.current.x as usize);
        (remaining, Some(remaining))
    }
}

/// Exact as long as the area fits in `usize`, see [`Dimensions::checked_area`].
impl ExactSizeIterator for DimensionsIter {}
