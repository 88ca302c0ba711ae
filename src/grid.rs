use std::iter;

use itertools::Either;
use log::{debug, trace};

use crate::{
    error::GridError,
    math::{Dimensions, Point},
};

/// A fixed-size, row-major 2D storage area.
///
/// Every cell is an `Option<T>`, with `None` marking an empty cell. The
/// dimensions are fixed at construction: there are always `height` rows of
/// `width` cells.
///
/// The grid itself does no synchronization. It is `Send`/`Sync` whenever `T`
/// is, writes from multiple threads must be guarded by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<Option<T>>,
    dims: Dimensions,
}

impl<T> Grid<T> {
    /// Creates a grid with every cell empty.
    ///
    /// Fails with [`GridError::TooLarge`] if the cell count doesn't fit in
    /// `usize`, a side is too long to be addressed by a [`Point`], or the
    /// cells can't be allocated.
    pub fn new(dims: Dimensions) -> Result<Self, GridError> {
        Self::from_fn(dims, |_| None)
    }

    /// Creates a grid from signed dimensions, rejecting negative ones with
    /// [`GridError::NegativeDimension`]. Zero-sized grids are allowed.
    pub fn try_new(width: isize, height: isize) -> Result<Self, GridError> {
        let dims = Dimensions::try_new(width, height).inspect_err(|err| {
            debug!(target: "grid", "Rejected grid dimensions: {err}");
        })?;
        Self::new(dims)
    }

    /// Creates a grid by calling `map_fn` for every point, row by row.
    pub fn from_fn<F>(dims: Dimensions, map_fn: F) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> Option<T>,
    {
        let too_large = || {
            let err = GridError::TooLarge { width: dims.width, height: dims.height };
            debug!(target: "grid", "Rejected grid dimensions: {err}");
            err
        };
        if !dims.is_addressable() {
            return Err(too_large());
        }
        trace!(target: "grid", "Allocating {}x{} grid", dims.width, dims.height);

        // The cell count may fit in usize while the bytes for it don't
        let mut cells = Vec::new();
        cells.try_reserve_exact(dims.area()).map_err(|_| too_large())?;
        cells.extend(dims.iter_within().map(map_fn));
        debug_assert_eq!(cells.len(), dims.area());
        Ok(Grid { cells, dims })
    }

    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    pub const fn width(&self) -> usize {
        self.dims.width
    }

    pub const fn height(&self) -> usize {
        self.dims.height
    }

    /// `width * height`. Can't overflow, construction already checked that.
    pub const fn area(&self) -> usize {
        self.dims.area()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Option<T>] {
        &mut self.cells
    }

    /// Exactly `height` rows of exactly `width` cells each, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        let width = self.dims.width;
        (0..self.dims.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Option<T>]> {
        let Dimensions { width, height } = self.dims;
        // chunks_exact_mut panics on 0, but there are still `height` (empty) rows
        if width == 0 {
            Either::Left(iter::repeat_with(<&mut [Option<T>]>::default).take(height))
        } else {
            Either::Right(self.cells.chunks_exact_mut(width))
        }
    }

    /// Every cell along with its point, row by row.
    pub fn enumerate(&self) -> impl Iterator<Item = (Point, &Option<T>)> {
        self.dims.iter_within().zip(self.cells.iter())
    }

    /// Only the non-empty cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Point, &T)> {
        self.enumerate().filter_map(|(p, cell)| Some((p, cell.as_ref()?)))
    }

    /// Returns the value at `point`, or `None` if the cell is empty or the
    /// point is outside of the grid.
    pub fn get(&self, point: Point) -> Option<&T> {
        self.data_index(point).and_then(|i| self.cells[i].as_ref())
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        self.data_index(point).and_then(|i| self.cells[i].as_mut())
    }

    /// Writes `item` into the cell at `point`, returning the previous value.
    pub fn set(&mut self, point: Point, item: T) -> Result<Option<T>, GridError> {
        let i = self
            .data_index(point)
            .ok_or(GridError::OutOfBounds { point, dims: self.dims })?;
        Ok(self.cells[i].replace(item))
    }

    /// Empties the cell at `point`, returning what was in it.
    pub fn take(&mut self, point: Point) -> Option<T> {
        let i = self.data_index(point)?;
        self.cells[i].take()
    }

    /// Empties every cell. The dimensions stay the same.
    pub fn clear(&mut self) {
        self.cells.fill_with(|| None);
    }

    fn data_index(&self, point: Point) -> Option<usize> {
        point.within(self).then(|| point.x as usize + point.y as usize * self.dims.width)
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use proptest::prelude::*;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::error::Axis;

    assert_impl_all!(Grid<u32>: Send, Sync, Clone);

    fn init_logger() {
        _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn grid_3x2() -> anyhow::Result<()> {
        init_logger();
        let grid = Grid::<char>::try_new(3, 2)?;

        assert_eq!(grid.area(), 6);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        let rows = grid.rows().collect::<Vec<_>>();
        assert_len_eq_x!(rows.clone(), 2);
        assert_all!(rows.iter(), |row: &&[Option<char>]| row.len() == 3);
        assert_all!(grid.cells().iter(), |c: &Option<char>| c.is_none());
        Ok(())
    }

    #[test]
    fn negative_dimensions() {
        init_logger();
        assert_eq!(
            Grid::<()>::try_new(-1, 2),
            Err(GridError::NegativeDimension { axis: Axis::Width, value: -1 })
        );
        assert_eq!(
            Grid::<()>::try_new(2, -5),
            Err(GridError::NegativeDimension { axis: Axis::Height, value: -5 })
        );
    }

    #[test]
    fn too_large() {
        init_logger();
        assert_eq!(
            Grid::<()>::try_new(isize::MAX, isize::MAX),
            Err(GridError::TooLarge { width: isize::MAX as usize, height: isize::MAX as usize })
        );
        assert!(matches!(
            Grid::<()>::new(Dimensions::new(usize::MAX, 1)),
            Err(GridError::TooLarge { .. })
        ));
        // Addressable cell count, but far more bytes than can be allocated
        assert_eq!(
            Grid::<u64>::try_new(isize::MAX / 2, 1),
            Err(GridError::TooLarge { width: isize::MAX as usize / 2, height: 1 })
        );
    }

    #[test]
    fn zero_sized() -> anyhow::Result<()> {
        let grid = Grid::<u8>::try_new(0, 0)?;
        assert_eq!(grid.area(), 0);
        assert_eq!(grid.rows().count(), 0);

        // Zero width still has its rows, they're just empty
        let mut grid = Grid::<u8>::try_new(0, 3)?;
        assert_eq!(grid.area(), 0);
        assert_eq!(grid.rows().map(<[_]>::len).collect::<Vec<_>>(), vec![0, 0, 0]);
        assert_eq!(grid.rows_mut().count(), 3);
        assert_eq!(grid.enumerate().count(), 0);
        Ok(())
    }

    #[test]
    fn set_get_take() -> anyhow::Result<()> {
        let mut grid = Grid::<&str>::try_new(4, 3)?;
        let p = Point::new(3, 2);

        assert_eq!(grid.set(p, "a")?, None);
        assert_eq!(grid.get(p), Some(&"a"));
        assert_eq!(grid.set(p, "b")?, Some("a"));
        // Row-major: the last cell of the last row
        assert_eq!(grid.cells()[11], Some("b"));

        if let Some(v) = grid.get_mut(p) {
            *v = "c";
        }
        assert_eq!(grid.take(p), Some("c"));
        assert_eq!(grid.get(p), None);
        assert_eq!(grid.take(p), None);
        Ok(())
    }

    #[test]
    fn set_out_of_bounds() -> anyhow::Result<()> {
        let mut grid = Grid::<u8>::try_new(3, 2)?;
        let before = grid.clone();

        for p in [Point::new(3, 1), Point::new(0, 2), Point::new(-1, 0)] {
            assert_eq!(grid.set(p, 1), Err(GridError::OutOfBounds { point: p, dims: grid.dims() }));
            assert_eq!(grid.get(p), None);
            assert_eq!(grid.take(p), None);
        }
        assert_eq!(grid, before);
        Ok(())
    }

    #[test]
    fn rows_mut_write_through() -> anyhow::Result<()> {
        let mut grid = Grid::<usize>::try_new(3, 2)?;
        for (y, row) in grid.rows_mut().enumerate() {
            row[1] = Some(y);
        }
        assert_eq!(grid.get(Point::new(1, 0)), Some(&0));
        assert_eq!(grid.get(Point::new(1, 1)), Some(&1));
        assert_eq!(grid.get(Point::new(0, 1)), None);

        grid.cells_mut()[0] = Some(9);
        assert_eq!(grid.get(Point::new(0, 0)), Some(&9));
        Ok(())
    }

    #[test]
    fn enumerate_and_occupied() -> anyhow::Result<()> {
        let grid = Grid::from_fn(Dimensions::new(3, 3), |p| (p.x == p.y).then_some(p.x))?;

        let points = grid.enumerate().map(|(p, _)| p).collect::<Vec<_>>();
        assert_len_eq_x!(points.clone(), 9);
        assert_all!(points.iter(), |p: &Point| p.within(&grid));

        assert_set_eq!(
            grid.occupied().map(|(p, &v)| (p, v)).collect::<Vec<_>>(),
            [(Point::new(0, 0), 0), (Point::new(1, 1), 1), (Point::new(2, 2), 2)]
        );
        Ok(())
    }

    #[test]
    fn clear_keeps_dims() -> anyhow::Result<()> {
        let mut grid = Grid::from_fn(Dimensions::new(2, 2), Some)?;
        assert_eq!(grid.occupied().count(), 4);

        grid.clear();
        assert_eq!(grid.occupied().count(), 0);
        assert_eq!(grid.dims(), Dimensions::new(2, 2));
        assert_eq!(grid.cells().len(), 4);
        Ok(())
    }

    proptest! {
        #[test]
        fn area_and_shape(width in 0isize..64, height in 0isize..64) {
            let grid = Grid::<u8>::try_new(width, height).unwrap();
            let (width, height) = (width as usize, height as usize);

            prop_assert_eq!(grid.area(), width * height);
            prop_assert_eq!(grid.rows().count(), height);
            prop_assert!(grid.rows().all(|row| row.len() == width));
            prop_assert!(grid.cells().iter().all(Option::is_none));
        }

        #[test]
        fn within_matches_bounds(
            width in 0isize..16,
            height in 0isize..16,
            x in -20isize..20,
            y in -20isize..20,
        ) {
            let grid = Grid::<()>::try_new(width, height).unwrap();
            let p = Point::new(x, y);
            prop_assert_eq!(p.within(&grid), 0 <= x && x < width && 0 <= y && y < height);
        }
    }
}
